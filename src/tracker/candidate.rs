//! Detector candidates for a single frame.

use serde::{Deserialize, Serialize};

use crate::tracker::rect::Rect;

/// One detector proposal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Bounding box corners
    pub bbox: Rect,
    /// Detection confidence score
    pub confidence: f32,
}

impl Candidate {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32, confidence: f32) -> Self {
        Self {
            bbox: Rect::from_tlbr(x1, y1, x2, y2),
            confidence,
        }
    }

    pub fn from_rect(bbox: Rect, confidence: f32) -> Self {
        Self { bbox, confidence }
    }
}

/// Everything the selector sees for one frame: the detector candidates plus
/// regions (other tracked bodies) whose interior must not be picked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameCandidates {
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub exclusions: Vec<Rect>,
}

impl FrameCandidates {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self {
            candidates,
            exclusions: Vec::new(),
        }
    }

    pub fn with_exclusions(mut self, exclusions: Vec<Rect>) -> Self {
        self.exclusions = exclusions;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl From<Vec<Candidate>> for FrameCandidates {
    fn from(candidates: Vec<Candidate>) -> Self {
        Self::new(candidates)
    }
}
