//! Error types shared by every stage.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The four coordinate channels of a trajectory disagree on frame count.
    #[error("coordinate channels have mismatched lengths: x1={x1}, y1={y1}, x2={x2}, y2={y2}")]
    ChannelLengthMismatch {
        x1: usize,
        y1: usize,
        x2: usize,
        y2: usize,
    },

    /// Some coordinate channels are present in a frame where others are absent.
    #[error("coordinate channels disagree on presence at frame {frame}")]
    ChannelPresenceMismatch { frame: usize },

    #[error("frame count mismatch: expected {expected} frames, got {got}")]
    FrameCountMismatch { expected: usize, got: usize },

    #[error("invalid frame size {width}x{height}")]
    InvalidFrameSize { width: f32, height: f32 },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("cache i/o error: {0}")]
    Cache(#[from] std::io::Error),

    #[error("cache format error: {0}")]
    CacheFormat(#[from] serde_json::Error),

    #[error("candidate source error: {0}")]
    Source(String),
}
