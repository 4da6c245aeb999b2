//! Local snapshot of the mirrored collection.
//!
//! The snapshot is a single JSON array of releases. It doubles as the cache
//! served by the randomizer and as the baseline for change detection: its
//! length is the last known remote item count.
use crate::discogs::Release;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot not found: {0:?}")]
    NotFound(PathBuf),
    #[error("snapshot {path:?} is not a release list: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Clone, Debug)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the snapshot. Never creates or modifies the file.
    pub fn load(&self) -> Result<Vec<Release>, SnapshotError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(SnapshotError::NotFound(self.path.clone()))
            }
            Err(e) => return Err(e.into()),
        };

        serde_json::from_slice(&bytes).map_err(|source| SnapshotError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Create an empty placeholder snapshot if none exists.
    ///
    /// Returns true if a placeholder was written. An existing file is left
    /// untouched, whatever its contents.
    pub fn ensure_exists(&self) -> Result<bool, SnapshotError> {
        self.create_parent_dir()?;

        let mut file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
            Err(e) => return Err(e.into()),
        };
        file.write_all(b"[]")?;

        info!("Created empty snapshot at {}", self.path.display());
        Ok(true)
    }

    /// Replace the snapshot with `releases`.
    ///
    /// Written to a sibling temp file and renamed into place, so readers see
    /// either the previous snapshot or the complete new one.
    pub fn write(&self, releases: &[Release]) -> Result<(), SnapshotError> {
        let json = serde_json::to_vec_pretty(releases)?;
        self.create_parent_dir()?;

        let temp_path = self.temp_path();
        std::fs::write(&temp_path, &json)?;
        if let Err(e) = std::fs::rename(&temp_path, &self.path) {
            let _ = std::fs::remove_file(&temp_path);
            return Err(e.into());
        }

        debug!(
            "Wrote {} release(s) ({} bytes) to {}",
            releases.len(),
            json.len(),
            self.path.display()
        );
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn create_parent_dir(&self) -> Result<(), SnapshotError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}
