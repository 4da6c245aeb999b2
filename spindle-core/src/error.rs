use crate::discogs::DiscogsError;
use crate::snapshot::SnapshotError;
use thiserror::Error;

/// Errors surfaced by the sync-then-pick path
#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("Remote catalog error: {0}")]
    Remote(#[from] DiscogsError),
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),
    #[error("Collection is empty")]
    EmptyCollection,
}

impl CollectionError {
    /// True when no snapshot file existed at load time
    pub fn is_not_found(&self) -> bool {
        matches!(self, CollectionError::Snapshot(SnapshotError::NotFound(_)))
    }
}
