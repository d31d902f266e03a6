use ndarray::{Array2, ArrayView1, Axis};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::tracker::Rect;

/// One TLBR box per frame, stored as an `(frames, 4)` matrix.
///
/// An empty trajectory means the object was never observed in the video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Array2<f32>", into = "Array2<f32>")]
pub struct DenseTrajectory {
    boxes: Array2<f32>,
}

pub const X1: usize = 0;
pub const Y1: usize = 1;
pub const X2: usize = 2;
pub const Y2: usize = 3;

impl DenseTrajectory {
    pub fn empty() -> Self {
        Self {
            boxes: Array2::zeros((0, 4)),
        }
    }

    /// Assemble from four per-frame coordinate channels. Channels must all
    /// have the same length.
    pub fn from_channels(x1: &[f32], y1: &[f32], x2: &[f32], y2: &[f32]) -> Result<Self> {
        let n = x1.len();
        if y1.len() != n || x2.len() != n || y2.len() != n {
            return Err(Error::ChannelLengthMismatch {
                x1: x1.len(),
                y1: y1.len(),
                x2: x2.len(),
                y2: y2.len(),
            });
        }
        let channels = [x1, y1, x2, y2];
        Ok(Self {
            boxes: Array2::from_shape_fn((n, 4), |(i, c)| channels[c][i]),
        })
    }

    pub fn from_rects(rects: &[Rect]) -> Self {
        Self {
            boxes: Array2::from_shape_fn((rects.len(), 4), |(i, c)| rects[i].to_tlbr()[c]),
        }
    }

    pub(crate) fn from_matrix(boxes: Array2<f32>) -> Self {
        debug_assert_eq!(boxes.ncols(), 4);
        Self { boxes }
    }

    pub fn len(&self) -> usize {
        self.boxes.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.nrows() == 0
    }

    /// TLBR box of one frame.
    pub fn get(&self, frame_index: usize) -> Option<[f32; 4]> {
        if frame_index >= self.len() {
            return None;
        }
        let row = self.boxes.row(frame_index);
        Some([row[X1], row[Y1], row[X2], row[Y2]])
    }

    pub fn rect(&self, frame_index: usize) -> Option<Rect> {
        self.get(frame_index)
            .map(|[x1, y1, x2, y2]| Rect::from_tlbr(x1, y1, x2, y2))
    }

    /// One coordinate over all frames (use [`X1`], [`Y1`], [`X2`], [`Y2`]).
    pub fn channel(&self, coord: usize) -> ArrayView1<'_, f32> {
        self.boxes.column(coord)
    }

    pub fn boxes(&self) -> &Array2<f32> {
        &self.boxes
    }

    pub fn iter(&self) -> impl Iterator<Item = [f32; 4]> + '_ {
        self.boxes
            .axis_iter(Axis(0))
            .map(|row| [row[X1], row[Y1], row[X2], row[Y2]])
    }
}

impl TryFrom<Array2<f32>> for DenseTrajectory {
    type Error = String;

    fn try_from(boxes: Array2<f32>) -> std::result::Result<Self, Self::Error> {
        if boxes.ncols() != 4 {
            return Err(format!("expected 4 coordinates per frame, got {}", boxes.ncols()));
        }
        Ok(Self { boxes })
    }
}

impl From<DenseTrajectory> for Array2<f32> {
    fn from(trajectory: DenseTrajectory) -> Self {
        trajectory.boxes
    }
}
