//! Assembles one frame's selector input from raw detector and tracker output.

use super::IntoCandidates;
use crate::tracker::{Candidate, FrameCandidates, Rect};

/// Collects ball candidates and exclusion regions (player bodies) for a
/// single frame.
///
/// ```ignore
/// let frame = FrameBuilder::new()
///     .detections(ball_model_output)
///     .ball_xywh(640.0, 300.0, 12.0, 12.0, 0.4)
///     .exclude_tlbr(600.0, 200.0, 700.0, 500.0)
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct FrameBuilder {
    candidates: Vec<Candidate>,
    exclusions: Vec<Rect>,
}

impl FrameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append converted detector output.
    pub fn detections(mut self, output: impl IntoCandidates) -> Self {
        self.candidates.extend(output.into_candidates());
        self
    }

    /// Ball candidate from corners (x1, y1, x2, y2).
    pub fn ball_tlbr(mut self, x1: f32, y1: f32, x2: f32, y2: f32, confidence: f32) -> Self {
        self.candidates.push(Candidate::new(x1, y1, x2, y2, confidence));
        self
    }

    /// Ball candidate from center and size, as most YOLO heads report it.
    pub fn ball_xywh(mut self, cx: f32, cy: f32, w: f32, h: f32, confidence: f32) -> Self {
        self.candidates
            .push(Candidate::from_rect(Rect::from_center(cx, cy, w, h), confidence));
        self
    }

    /// Region whose interior must not be picked, e.g. a tracked player.
    pub fn exclude(mut self, region: Rect) -> Self {
        self.exclusions.push(region);
        self
    }

    pub fn exclude_tlbr(self, x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        self.exclude(Rect::from_tlbr(x1, y1, x2, y2))
    }

    /// Exclusion regions from every tracked body in the frame.
    pub fn exclude_all<I>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = Rect>,
    {
        self.exclusions.extend(regions);
        self
    }

    pub fn build(self) -> FrameCandidates {
        FrameCandidates::new(self.candidates).with_exclusions(self.exclusions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_builder() {
        let frame = FrameBuilder::new()
            .detections(vec![([10.0, 20.0, 22.0, 32.0], 0.9)])
            .ball_xywh(100.0, 100.0, 10.0, 10.0, 0.3)
            .exclude_tlbr(0.0, 0.0, 50.0, 50.0)
            .build();

        assert_eq!(frame.candidates.len(), 2);
        assert_eq!(frame.candidates[0].bbox.to_tlbr(), [10.0, 20.0, 22.0, 32.0]);
        assert_eq!(frame.candidates[1].bbox.to_tlbr(), [95.0, 95.0, 105.0, 105.0]);
        assert_eq!(frame.exclusions, vec![Rect::from_tlbr(0.0, 0.0, 50.0, 50.0)]);
    }

    #[test]
    fn test_formats_agree() {
        let a = FrameBuilder::new().ball_xywh(15.0, 25.0, 10.0, 10.0, 0.5).build();
        let b = FrameBuilder::new().ball_tlbr(10.0, 20.0, 20.0, 30.0, 0.5).build();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_frame() {
        let frame = FrameBuilder::new().exclude_all(Vec::new()).build();
        assert!(frame.is_empty());
        assert!(frame.exclusions.is_empty());
    }
}
