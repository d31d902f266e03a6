//! Shot events: frames where the tracked object's vertical motion reverses
//! and keeps the new direction.

mod detector;
mod signal;

pub use detector::{ShotDetector, ShotDetectorConfig};
pub use signal::VerticalSignal;
