//! ShotPipeline for running selection, interpolation and shot detection over
//! one video.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::CandidateSource;
use crate::error::{Error, Result};
use crate::shots::{ShotDetector, ShotDetectorConfig};
use crate::tracker::{Candidate, CandidateSelector, FrameCandidates, Rect, SelectorConfig};
use crate::trajectory::{DenseTrajectory, SparseTrajectory, TrajectoryCache, interpolate};

/// Configuration for every stage of the pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub selector: SelectorConfig,
    pub shots: ShotDetectorConfig,
}

impl PipelineConfig {
    /// Parse from JSON; missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.selector.validate()?;
        self.shots.validate()
    }
}

/// Everything produced for one video.
#[derive(Debug, Clone, PartialEq)]
pub struct ShotAnalysis {
    pub sparse: SparseTrajectory,
    /// Empty when the object was never observed
    pub dense: DenseTrajectory,
    pub shot_frames: BTreeSet<usize>,
}

impl ShotAnalysis {
    pub fn is_observed(&self) -> bool {
        !self.dense.is_empty()
    }
}

/// Runs the three stages in order. One pipeline can serve many videos: it
/// keeps no per-video state.
pub struct ShotPipeline {
    selector: CandidateSelector,
    detector: ShotDetector,
    cache: Option<TrajectoryCache>,
}

impl ShotPipeline {
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            selector: CandidateSelector::new(config.selector),
            detector: ShotDetector::new(config.shots),
            cache: None,
        })
    }

    /// Read the sparse trajectory from `cache` when it exists, and write it
    /// there after selection otherwise. A cached trajectory must have as many
    /// frames as the candidates given to [`run`](Self::run).
    pub fn with_cache(mut self, cache: TrajectoryCache) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn selector(&self) -> &CandidateSelector {
        &self.selector
    }

    pub fn detector(&self) -> &ShotDetector {
        &self.detector
    }

    /// Process a whole video given its per-frame candidates.
    pub fn run(&self, frames: &[FrameCandidates]) -> Result<ShotAnalysis> {
        let sparse = match &self.cache {
            Some(cache) => cache.load_or_compute_sparse(frames.len(), || Ok(self.selector.run(frames)))?,
            None => self.selector.run(frames),
        };
        Ok(self.analyze(sparse))
    }

    /// Same as [`run`](Self::run), pairing candidates with per-frame exclusion
    /// regions. Both lists must cover the same frames.
    pub fn run_with_exclusions(&self, candidates: Vec<Vec<Candidate>>, exclusions: Vec<Vec<Rect>>) -> Result<ShotAnalysis> {
        if candidates.len() != exclusions.len() {
            return Err(Error::FrameCountMismatch {
                expected: candidates.len(),
                got: exclusions.len(),
            });
        }
        let frames: Vec<FrameCandidates> = candidates
            .into_iter()
            .zip(exclusions)
            .map(|(cands, excl)| FrameCandidates::new(cands).with_exclusions(excl))
            .collect();
        self.run(&frames)
    }

    /// Pull every frame from `source`. A cached trajectory short-circuits the
    /// source entirely.
    pub fn run_source<S: CandidateSource>(&self, source: &mut S) -> Result<ShotAnalysis> {
        if let Some(cache) = self.cache.as_ref().filter(|c| c.exists()) {
            info!(path = %cache.path().display(), "using cached trajectory, detector skipped");
            return Ok(self.analyze(cache.load_sparse()?));
        }

        let mut frames = Vec::new();
        while let Some(frame) = source.next_frame().map_err(|e| Error::Source(e.to_string()))? {
            frames.push(frame);
        }
        self.run(&frames)
    }

    /// Interpolate and detect shots on an already selected trajectory.
    pub fn analyze(&self, sparse: SparseTrajectory) -> ShotAnalysis {
        let dense = interpolate(&sparse);
        let shot_frames = if dense.is_empty() {
            warn!(frames = sparse.len(), "no object observed, no shots");
            BTreeSet::new()
        } else {
            self.detector.detect(&dense)
        };
        ShotAnalysis {
            sparse,
            dense,
            shot_frames,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockSource {
        frames: Vec<FrameCandidates>,
    }

    impl CandidateSource for MockSource {
        type Error = std::convert::Infallible;

        fn next_frame(&mut self) -> std::result::Result<Option<FrameCandidates>, Self::Error> {
            if self.frames.is_empty() {
                Ok(None)
            } else {
                Ok(Some(self.frames.remove(0)))
            }
        }
    }

    struct FailingSource;

    impl CandidateSource for FailingSource {
        type Error = String;

        fn next_frame(&mut self) -> std::result::Result<Option<FrameCandidates>, Self::Error> {
            Err("decoder crashed".to_string())
        }
    }

    fn pipeline() -> ShotPipeline {
        ShotPipeline::new(PipelineConfig::default()).unwrap()
    }

    #[test]
    fn test_pipeline_from_source() {
        let mut source = MockSource {
            frames: vec![
                FrameCandidates::new(vec![Candidate::new(10.0, 20.0, 30.0, 40.0, 0.9)]),
                FrameCandidates::default(),
                FrameCandidates::new(vec![Candidate::new(14.0, 24.0, 34.0, 44.0, 0.9)]),
            ],
        };
        let analysis = pipeline().run_source(&mut source).unwrap();
        assert!(analysis.is_observed());
        assert_eq!(analysis.dense.len(), 3);
        assert_eq!(analysis.dense.get(1), Some([12.0, 22.0, 32.0, 42.0]));
        assert!(analysis.shot_frames.is_empty());
    }

    #[test]
    fn test_source_error_surfaces() {
        let err = pipeline().run_source(&mut FailingSource).unwrap_err();
        assert!(matches!(err, Error::Source(msg) if msg == "decoder crashed"));
    }

    #[test]
    fn test_never_observed_is_not_an_error() {
        let frames = vec![FrameCandidates::default(); 50];
        let analysis = pipeline().run(&frames).unwrap();
        assert!(!analysis.is_observed());
        assert!(analysis.shot_frames.is_empty());
        assert_eq!(analysis.sparse.len(), 50);
    }

    #[test]
    fn test_exclusion_count_mismatch() {
        let err = pipeline()
            .run_with_exclusions(vec![vec![], vec![]], vec![vec![]])
            .unwrap_err();
        assert!(matches!(err, Error::FrameCountMismatch { expected: 2, got: 1 }));
    }

    #[test]
    fn test_config_from_json() {
        let config = PipelineConfig::from_json_str(r#"{"selector": {"frame_width": 1280.0, "frame_height": 720.0}}"#).unwrap();
        assert_eq!(config.selector.frame_width, 1280.0);
        assert_eq!(config.selector.max_area_fraction, 0.022);
        assert_eq!(config.shots.min_change_frames, 18);

        assert!(PipelineConfig::from_json_str(r#"{"selector": {"frame_width": 0.0}}"#).is_err());
    }

    #[test]
    fn test_config_rejects_empty_shot_window() {
        let err = PipelineConfig::from_json_str(r#"{"shots": {"window_multiplier": 0.0}}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let config = PipelineConfig {
            shots: ShotDetectorConfig {
                min_change_frames: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(ShotPipeline::new(config).is_err());
    }

    #[test]
    fn test_config_parse_error_is_config_error() {
        let err = PipelineConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().starts_with("invalid configuration"));
    }
}
