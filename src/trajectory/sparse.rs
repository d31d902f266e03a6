use serde::{Deserialize, Serialize};

use crate::tracker::Rect;

/// One slot per frame, `None` where no candidate was chosen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SparseTrajectory {
    slots: Vec<Option<Rect>>,
}

impl SparseTrajectory {
    pub fn from_slots(slots: Vec<Option<Rect>>) -> Self {
        Self { slots }
    }

    /// Build from TLBR tuples, `None` marking an absent frame.
    pub fn from_tlbr(frames: &[Option<[f32; 4]>]) -> Self {
        frames
            .iter()
            .map(|f| f.map(|[x1, y1, x2, y2]| Rect::from_tlbr(x1, y1, x2, y2)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, frame_index: usize) -> Option<Rect> {
        self.slots.get(frame_index).copied().flatten()
    }

    pub fn slots(&self) -> &[Option<Rect>] {
        &self.slots
    }

    pub fn observed_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Present in every frame.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// One coordinate channel in TLBR order (0 = x1 .. 3 = y2).
    pub(crate) fn channel(&self, coord: usize) -> Vec<Option<f64>> {
        self.slots
            .iter()
            .map(|s| s.map(|r| r.to_tlbr()[coord] as f64))
            .collect()
    }
}

impl FromIterator<Option<Rect>> for SparseTrajectory {
    fn from_iter<I: IntoIterator<Item = Option<Rect>>>(iter: I) -> Self {
        Self::from_slots(iter.into_iter().collect())
    }
}
