//! Gap filling from a sparse to a dense trajectory.

use ndarray::Array2;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::trajectory::dense::DenseTrajectory;
use crate::trajectory::sparse::SparseTrajectory;

/// Fill every absent frame of `sparse`.
///
/// Interior gaps are interpolated linearly by frame distance, trailing gaps
/// repeat the last observed box and a leading gap repeats the first one.
/// Returns an empty trajectory when nothing was observed at all.
pub fn interpolate(sparse: &SparseTrajectory) -> DenseTrajectory {
    let channels: Vec<Vec<Option<f64>>> = (0..4).map(|c| sparse.channel(c)).collect();
    let filled: Option<Vec<Vec<f64>>> = channels.iter().map(|c| fill_channel(c)).collect();

    match filled {
        Some(filled) => {
            info!(
                frames = sparse.len(),
                filled = sparse.len() - sparse.observed_count(),
                "trajectory interpolated"
            );
            let boxes = Array2::from_shape_fn((sparse.len(), 4), |(i, c)| filled[c][i] as f32);
            DenseTrajectory::from_matrix(boxes)
        }
        None => {
            warn!(frames = sparse.len(), "no observation to interpolate from");
            DenseTrajectory::empty()
        }
    }
}

/// Interpolate four independent coordinate channels. Fails if they do not
/// cover the same number of frames, or if a frame has some coordinates but
/// not all four.
pub fn interpolate_channels(
    x1: &[Option<f64>],
    y1: &[Option<f64>],
    x2: &[Option<f64>],
    y2: &[Option<f64>],
) -> Result<DenseTrajectory> {
    let n = x1.len();
    if y1.len() != n || x2.len() != n || y2.len() != n {
        return Err(Error::ChannelLengthMismatch {
            x1: x1.len(),
            y1: y1.len(),
            x2: x2.len(),
            y2: y2.len(),
        });
    }

    if let Some(frame) = (0..n).find(|&i| {
        let present = [x1[i], y1[i], x2[i], y2[i]].iter().filter(|v| v.is_some()).count();
        present != 0 && present != 4
    }) {
        return Err(Error::ChannelPresenceMismatch { frame });
    }

    let filled: Option<Vec<Vec<f64>>> = [x1, y1, x2, y2].into_iter().map(fill_channel).collect();
    Ok(match filled {
        Some(filled) => {
            DenseTrajectory::from_matrix(Array2::from_shape_fn((n, 4), |(i, c)| filled[c][i] as f32))
        }
        None => DenseTrajectory::empty(),
    })
}

/// Fill one channel. `None` if the channel holds no value at all.
pub fn fill_channel(values: &[Option<f64>]) -> Option<Vec<f64>> {
    let first = values.iter().position(Option::is_some)?;
    let mut out = Vec::with_capacity(values.len());

    let first_value = values[first]?;
    out.extend(std::iter::repeat_n(first_value, first));

    let mut last_idx = first;
    let mut last_value = first_value;
    out.push(first_value);

    for (idx, value) in values.iter().enumerate().skip(first + 1) {
        if let Some(v) = *value {
            let span = (idx - last_idx) as f64;
            for k in last_idx + 1..idx {
                let t = (k - last_idx) as f64 / span;
                out.push(last_value + (v - last_value) * t);
            }
            out.push(v);
            last_idx = idx;
            last_value = v;
        }
    }

    out.extend(std::iter::repeat_n(last_value, values.len() - out.len()));
    Some(out)
}
