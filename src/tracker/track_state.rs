use nalgebra::Point2;

/// Selection memory threaded from one frame to the next.
///
/// Starts empty before the first frame and only ever moves forward: a frame
/// without a chosen candidate leaves it untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackState {
    /// Center of the last chosen box
    pub previous_center: Option<Point2<f32>>,
    /// Frame index of the last chosen box
    pub last_frame: Option<usize>,
}

impl TrackState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.previous_center.is_some()
    }

    /// Frames elapsed since the last chosen box, if any.
    pub fn frames_since_seen(&self, frame_index: usize) -> Option<usize> {
        self.last_frame.map(|f| frame_index.saturating_sub(f))
    }
}
