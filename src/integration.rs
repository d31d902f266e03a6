//! Integration module for connecting a detector to the tracking and shot
//! detection stages.

mod builder;
mod pipeline;
mod source;

pub use builder::FrameBuilder;
pub use pipeline::{PipelineConfig, ShotAnalysis, ShotPipeline};
pub use source::{CandidateSource, IntoCandidates};
