//! Static geometric gates applied to every candidate before selection.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::tracker::candidate::Candidate;
use crate::tracker::rect::Rect;

/// Configuration for the candidate selector.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub frame_width: f32,
    pub frame_height: f32,
    /// Largest accepted box area as a fraction of the frame area
    pub max_area_fraction: f32,
    pub min_aspect_ratio: f32,
    pub max_aspect_ratio: f32,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            frame_width: 1920.0,
            frame_height: 1080.0,
            max_area_fraction: 0.022,
            min_aspect_ratio: 0.7,
            max_aspect_ratio: 1.6,
        }
    }
}

impl SelectorConfig {
    pub fn for_frame(frame_width: f32, frame_height: f32) -> Self {
        Self {
            frame_width,
            frame_height,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if valid(self.frame_width) && valid(self.frame_height) {
            Ok(())
        } else {
            Err(Error::InvalidFrameSize {
                width: self.frame_width,
                height: self.frame_height,
            })
        }
    }

    pub fn max_area(&self) -> f32 {
        self.max_area_fraction * self.frame_width * self.frame_height
    }
}

/// Why a candidate was dropped before selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// Non-finite coordinates or non-positive width/height
    Degenerate,
    TooLarge,
    AspectRatio,
    Excluded,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Degenerate => "degenerate box",
            Self::TooLarge => "area above limit",
            Self::AspectRatio => "aspect ratio out of range",
            Self::Excluded => "center inside exclusion region",
        };
        f.write_str(s)
    }
}

/// Run every gate against one candidate.
pub fn gate(candidate: &Candidate, exclusions: &[Rect], config: &SelectorConfig) -> std::result::Result<(), RejectReason> {
    let bbox = &candidate.bbox;
    if bbox.is_degenerate() || !candidate.confidence.is_finite() {
        return Err(RejectReason::Degenerate);
    }
    if bbox.area() > config.max_area() {
        return Err(RejectReason::TooLarge);
    }
    let aspect = bbox.aspect_ratio();
    if !(config.min_aspect_ratio..=config.max_aspect_ratio).contains(&aspect) {
        return Err(RejectReason::AspectRatio);
    }
    let center = bbox.center();
    if exclusions.iter().any(|region| region.contains(&center)) {
        return Err(RejectReason::Excluded);
    }
    Ok(())
}
