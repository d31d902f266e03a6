use ndarray::Array1;

use crate::trajectory::{DenseTrajectory, Y1, Y2};

/// Vertical motion of the tracked box, frame by frame.
#[derive(Debug, Clone, PartialEq)]
pub struct VerticalSignal {
    /// Vertical center of the box
    pub mid_y: Array1<f64>,
    /// Trailing moving average of `mid_y`
    pub smoothed: Array1<f64>,
    /// `smoothed[f] - smoothed[f - 1]`; the first entry is 0 and never consulted
    pub delta: Array1<f64>,
}

impl VerticalSignal {
    pub fn from_trajectory(trajectory: &DenseTrajectory, window: usize) -> Self {
        let y1 = trajectory.channel(Y1);
        let y2 = trajectory.channel(Y2);
        let mid_y: Array1<f64> = y1
            .iter()
            .zip(y2.iter())
            .map(|(&a, &b)| (a as f64 + b as f64) / 2.0)
            .collect();
        Self::from_mid_y(mid_y, window)
    }

    /// Build from an already extracted vertical position sequence.
    pub fn from_mid_y(mid_y: Array1<f64>, window: usize) -> Self {
        let smoothed = trailing_mean(&mid_y, window);
        let mut delta = Array1::zeros(smoothed.len());
        for f in 1..smoothed.len() {
            delta[f] = smoothed[f] - smoothed[f - 1];
        }
        Self {
            mid_y,
            smoothed,
            delta,
        }
    }

    pub fn len(&self) -> usize {
        self.mid_y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mid_y.is_empty()
    }
}

/// Mean over the last `window` samples up to and including each frame; the
/// first frames average whatever is available.
fn trailing_mean(values: &Array1<f64>, window: usize) -> Array1<f64> {
    let window = window.max(1);
    let samples = values.to_vec();
    (0..samples.len())
        .map(|f| {
            let start = (f + 1).saturating_sub(window);
            let slice = &samples[start..=f];
            slice.iter().sum::<f64>() / slice.len() as f64
        })
        .collect()
}
