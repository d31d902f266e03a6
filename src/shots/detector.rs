//! Sustained vertical reversal ("shot") detection.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::shots::signal::VerticalSignal;
use crate::trajectory::DenseTrajectory;

/// Configuration for the ShotDetector.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShotDetectorConfig {
    /// Trailing moving-average window over the vertical center
    pub smoothing_window: usize,
    /// Base sensitivity: frames that must follow the new direction
    pub min_change_frames: usize,
    /// Look-ahead window as a multiple of `min_change_frames`
    pub window_multiplier: f64,
}

impl Default for ShotDetectorConfig {
    fn default() -> Self {
        Self {
            smoothing_window: 5,
            min_change_frames: 18,
            window_multiplier: 1.2,
        }
    }
}

impl ShotDetectorConfig {
    /// Look-ahead length, truncated: 18 * 1.2 gives 21.
    pub fn confirmation_window(&self) -> usize {
        (self.min_change_frames as f64 * self.window_multiplier) as usize
    }

    /// A reversal is confirmed when strictly more than this many look-ahead
    /// frames move against the pre-reversal direction.
    pub fn min_confirming(&self) -> usize {
        self.min_change_frames.saturating_sub(1)
    }

    pub fn validate(&self) -> Result<()> {
        if self.smoothing_window == 0 {
            return Err(Error::Config("smoothing_window must be at least 1".into()));
        }
        if self.min_change_frames == 0 {
            return Err(Error::Config("min_change_frames must be at least 1".into()));
        }
        if !self.window_multiplier.is_finite() || self.window_multiplier <= 0.0 {
            return Err(Error::Config(format!(
                "window_multiplier must be finite and positive, got {}",
                self.window_multiplier
            )));
        }
        if self.confirmation_window() == 0 {
            return Err(Error::Config("confirmation window is empty".into()));
        }
        Ok(())
    }
}

pub struct ShotDetector {
    config: ShotDetectorConfig,
}

impl Default for ShotDetector {
    fn default() -> Self {
        Self::new(ShotDetectorConfig::default())
    }
}

impl ShotDetector {
    pub fn new(config: ShotDetectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ShotDetectorConfig {
        &self.config
    }

    pub fn signal(&self, trajectory: &DenseTrajectory) -> VerticalSignal {
        VerticalSignal::from_trajectory(trajectory, self.config.smoothing_window)
    }

    /// Frames at which the vertical direction reverses and stays reversed.
    pub fn detect(&self, trajectory: &DenseTrajectory) -> BTreeSet<usize> {
        self.detect_in_signal(&self.signal(trajectory))
    }

    pub fn detect_in_signal(&self, signal: &VerticalSignal) -> BTreeSet<usize> {
        let delta = &signal.delta;
        // The scan reads delta[i + 1], so at least one look-ahead frame.
        let window = self.config.confirmation_window().max(1);
        let min_confirming = self.config.min_confirming();
        let mut shots = BTreeSet::new();

        for i in 1..delta.len().saturating_sub(window) {
            let before = delta[i];
            if !opposite_signs(before, delta[i + 1]) {
                continue;
            }

            // Followers are compared with the direction before the flip, not
            // with the first frame after it.
            let confirming = (i + 1..=i + window)
                .filter(|&f| opposite_signs(before, delta[f]))
                .count();

            if confirming > min_confirming {
                debug!(frame = i, confirming, "reversal confirmed");
                shots.insert(i);
            }
        }

        info!(frames = delta.len(), shots = shots.len(), "shot detection finished");
        shots
    }
}

/// One strictly positive and the other strictly negative.
#[inline]
fn opposite_signs(a: f64, b: f64) -> bool {
    (a > 0.0 && b < 0.0) || (a < 0.0 && b > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    fn detect(mid_y: Vec<f64>) -> BTreeSet<usize> {
        let detector = ShotDetector::default();
        let signal = VerticalSignal::from_mid_y(Array1::from(mid_y), detector.config().smoothing_window);
        detector.detect_in_signal(&signal)
    }

    #[test]
    fn test_default_windows() {
        let config = ShotDetectorConfig::default();
        assert_eq!(config.confirmation_window(), 21);
        assert_eq!(config.min_confirming(), 17);
    }

    #[test]
    fn test_validate_rejects_empty_window() {
        assert!(ShotDetectorConfig::default().validate().is_ok());

        let zero_multiplier = ShotDetectorConfig {
            window_multiplier: 0.0,
            ..Default::default()
        };
        assert!(matches!(zero_multiplier.validate(), Err(Error::Config(_))));

        let no_frames = ShotDetectorConfig {
            min_change_frames: 0,
            ..Default::default()
        };
        assert!(no_frames.validate().is_err());

        let nan = ShotDetectorConfig {
            window_multiplier: f64::NAN,
            ..Default::default()
        };
        assert!(nan.validate().is_err());

        // 1 * 0.5 truncates to an empty window.
        let truncated = ShotDetectorConfig {
            min_change_frames: 1,
            window_multiplier: 0.5,
            ..Default::default()
        };
        assert!(truncated.validate().is_err());
    }

    #[test]
    fn test_unvalidated_empty_window_does_not_panic() {
        let detector = ShotDetector::new(ShotDetectorConfig {
            window_multiplier: 0.0,
            ..Default::default()
        });
        let mid_y: Vec<f64> = (0..30).map(|f| if f % 2 == 0 { 0.0 } else { 5.0 }).collect();
        let signal = VerticalSignal::from_mid_y(Array1::from(mid_y), 5);
        detector.detect_in_signal(&signal);
    }

    #[test]
    fn test_opposite_signs_ignores_zero() {
        assert!(opposite_signs(1.0, -1.0));
        assert!(opposite_signs(-0.5, 2.0));
        assert!(!opposite_signs(0.0, -1.0));
        assert!(!opposite_signs(1.0, 0.0));
        assert!(!opposite_signs(1.0, 1.0));
    }

    #[test]
    fn test_single_peak() {
        let mut mid_y: Vec<f64> = (0..=40).map(|f| 100.0 + 3.0 * f as f64).collect();
        mid_y.extend((1..=40).map(|k| 220.0 - 3.0 * k as f64));
        let shots = detect(mid_y);
        assert_eq!(shots.len(), 1);
        let frame = *shots.iter().next().unwrap();
        assert!((38..=42).contains(&frame), "shot at {frame}");
    }

    #[test]
    fn test_repeated_bounces() {
        let mut y = 100.0;
        let mut mid_y = Vec::new();
        for segment in 0..4 {
            for _ in 0..40 {
                y += if segment % 2 == 0 { 3.0 } else { -3.0 };
                mid_y.push(y);
            }
        }
        let shots: Vec<usize> = detect(mid_y).into_iter().collect();
        assert_eq!(shots, vec![41, 81, 121]);
    }

    #[test]
    fn test_flat_signal() {
        assert!(detect(vec![5.0; 100]).is_empty());
    }

    #[test]
    fn test_short_signal_skips_scan() {
        let mut mid_y: Vec<f64> = (0..12).map(|f| f as f64).collect();
        mid_y.extend((0..10).map(|k| 10.0 - k as f64));
        assert_eq!(mid_y.len(), 22);
        assert!(detect(mid_y).is_empty());
        assert!(detect(Vec::new()).is_empty());
    }

    #[test]
    fn test_short_lived_reversal_not_confirmed() {
        // Up for 40 frames, down for 10, up again for 40: only the return to
        // rising persists long enough.
        let mut y = 0.0;
        let mut mid_y = Vec::new();
        for (frames, step) in [(40, 2.0), (10, -2.0), (40, 2.0)] {
            for _ in 0..frames {
                y += step;
                mid_y.push(y);
            }
        }
        let shots: Vec<usize> = detect(mid_y).into_iter().collect();
        assert_eq!(shots, vec![51]);
    }
}
