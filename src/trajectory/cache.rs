//! JSON cache of trajectories, so downstream stages can be re-run without
//! invoking the detector again.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Error, Result};
use crate::trajectory::dense::DenseTrajectory;
use crate::trajectory::sparse::SparseTrajectory;

/// A trajectory cache file. Sparse trajectories are stored as a JSON array
/// with `null` for absent frames, dense ones in ndarray's matrix encoding.
#[derive(Debug, Clone)]
pub struct TrajectoryCache {
    path: PathBuf,
}

impl TrajectoryCache {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    pub fn save_sparse(&self, trajectory: &SparseTrajectory) -> Result<()> {
        self.write(trajectory)
    }

    pub fn load_sparse(&self) -> Result<SparseTrajectory> {
        self.read()
    }

    pub fn save_dense(&self, trajectory: &DenseTrajectory) -> Result<()> {
        self.write(trajectory)
    }

    pub fn load_dense(&self) -> Result<DenseTrajectory> {
        self.read()
    }

    /// Load the cached sparse trajectory if present, otherwise compute it and
    /// store the result. A cached trajectory must cover `frame_count` frames.
    pub fn load_or_compute_sparse<F>(&self, frame_count: usize, compute: F) -> Result<SparseTrajectory>
    where
        F: FnOnce() -> Result<SparseTrajectory>,
    {
        if self.exists() {
            debug!(path = %self.path.display(), "reading cached trajectory");
            let cached = self.load_sparse()?;
            if cached.len() != frame_count {
                return Err(Error::FrameCountMismatch {
                    expected: frame_count,
                    got: cached.len(),
                });
            }
            return Ok(cached);
        }
        let trajectory = compute()?;
        self.save_sparse(&trajectory)?;
        Ok(trajectory)
    }

    fn write<T: Serialize>(&self, value: &T) -> Result<()> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer(&mut writer, value)?;
        writer.flush()?;
        debug!(path = %self.path.display(), "trajectory cached");
        Ok(())
    }

    fn read<T: DeserializeOwned>(&self) -> Result<T> {
        let reader = BufReader::new(File::open(&self.path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}
