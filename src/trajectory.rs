//! Per-frame position sequences of the tracked object.

mod cache;
mod dense;
mod interpolate;
mod sparse;

pub use cache::TrajectoryCache;
pub use dense::{DenseTrajectory, X1, X2, Y1, Y2};
pub use interpolate::{fill_channel, interpolate, interpolate_channels};
pub use sparse::SparseTrajectory;
