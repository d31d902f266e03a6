//! Single-object ball tracking and shot detection.
//!
//! The crate consumes per-frame detector candidates and runs three stages:
//! candidate selection ([`CandidateSelector`]), gap interpolation
//! ([`interpolate`]) and shot event detection ([`ShotDetector`]).

pub mod error;
pub mod integration;
pub mod shots;
pub mod tracker;
pub mod trajectory;

pub use error::{Error, Result};
pub use integration::{CandidateSource, FrameBuilder, IntoCandidates, PipelineConfig, ShotAnalysis, ShotPipeline};
pub use shots::{ShotDetector, ShotDetectorConfig, VerticalSignal};
pub use tracker::{Candidate, CandidateSelector, FrameCandidates, Rect, SelectorConfig, TrackState};
pub use trajectory::{DenseTrajectory, SparseTrajectory, TrajectoryCache, interpolate};
