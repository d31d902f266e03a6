//! Trait for the external detector feeding per-frame candidates.

use crate::tracker::{Candidate, FrameCandidates, Rect};

/// A producer of per-frame candidates, typically wrapping an object detector
/// that runs over decoded video frames.
///
/// # Example
///
/// ```ignore
/// use shottrack_rs::{CandidateSource, FrameCandidates};
///
/// struct MyDetector {
///     // Your model and video reader here
/// }
///
/// impl CandidateSource for MyDetector {
///     type Error = std::io::Error;
///
///     fn next_frame(&mut self) -> Result<Option<FrameCandidates>, Self::Error> {
///         // Decode a frame, run inference, return Ok(None) at end of video
///         Ok(None)
///     }
/// }
/// ```
pub trait CandidateSource {
    /// Error type for detection failures.
    type Error: std::fmt::Display;

    /// Candidates for the next frame, or `None` once the video is exhausted.
    fn next_frame(&mut self) -> Result<Option<FrameCandidates>, Self::Error>;
}

/// Helper trait for converting model-specific outputs to `Candidate`s.
pub trait IntoCandidates {
    /// Convert the output into a vector of candidates.
    fn into_candidates(self) -> Vec<Candidate>;
}

impl IntoCandidates for Vec<Candidate> {
    fn into_candidates(self) -> Vec<Candidate> {
        self
    }
}

/// TLBR boxes paired with confidence.
impl IntoCandidates for Vec<([f32; 4], f32)> {
    fn into_candidates(self) -> Vec<Candidate> {
        self.into_iter()
            .map(|([x1, y1, x2, y2], conf)| Candidate::new(x1, y1, x2, y2, conf))
            .collect()
    }
}

impl IntoCandidates for Vec<(Rect, f32)> {
    fn into_candidates(self) -> Vec<Candidate> {
        self.into_iter()
            .map(|(bbox, conf)| Candidate::from_rect(bbox, conf))
            .collect()
    }
}
