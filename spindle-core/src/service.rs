//! Service context shared by the HTTP routes.
use crate::config::CollectionConfig;
use crate::discogs::{sync_collection, DiscogsClient, Release};
use crate::error::CollectionError;
use crate::names::strip_disambiguation;
use crate::randomizer::Randomizer;
use crate::snapshot::SnapshotStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

pub type SharedCollectionService = Arc<CollectionService>;

/// Album shape returned by `GET /album`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlbumPick {
    pub artists: Vec<String>,
    pub album: String,
}

impl AlbumPick {
    pub fn from_release(release: &Release) -> Self {
        Self {
            artists: release
                .basic_information
                .artists
                .iter()
                .map(|artist| strip_disambiguation(&artist.name))
                .collect(),
            album: release.basic_information.title.clone(),
        }
    }
}

/// Owns the Discogs client and the snapshot, and serializes syncs.
pub struct CollectionService {
    client: DiscogsClient,
    store: SnapshotStore,
    folder_id: u64,
    per_page: u32,
    /// Held for the whole sync so snapshot writes never interleave
    sync_lock: Mutex<()>,
}

impl CollectionService {
    pub fn new(client: DiscogsClient, config: CollectionConfig) -> Self {
        Self {
            client,
            store: SnapshotStore::new(config.snapshot_path),
            folder_id: config.folder_id,
            per_page: config.per_page,
            sync_lock: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &SnapshotStore {
        &self.store
    }

    /// Run one sync. Concurrent callers queue behind the running one.
    ///
    /// The session (and its connections) is dropped on return, whether the
    /// sync succeeded or not.
    pub async fn sync(&self) -> Result<bool, CollectionError> {
        let _guard = self.sync_lock.lock().await;
        let session = self.client.open()?;
        debug!(
            "Syncing folder {} for {} ({})",
            self.folder_id,
            self.client.username(),
            if self.client.is_authenticated() {
                "authenticated"
            } else {
                "anonymous"
            }
        );
        sync_collection(&session, self.folder_id, self.per_page, &self.store).await
    }

    /// Load the snapshot for picking.
    ///
    /// A missing snapshot is replaced with an empty placeholder before the
    /// not-found error is returned, so the next load reports an empty
    /// collection instead.
    pub fn load_randomizer(&self) -> Result<Randomizer, CollectionError> {
        match Randomizer::load(&self.store) {
            Err(e) if e.is_not_found() => {
                warn!("{e}; creating an empty placeholder");
                self.store.ensure_exists()?;
                Err(e)
            }
            other => other,
        }
    }

    /// Sync, then pick one album uniformly from the snapshot.
    pub async fn random_album(&self) -> Result<AlbumPick, CollectionError> {
        self.sync().await?;
        let randomizer = self.load_randomizer()?;
        let release = randomizer.pick_random()?;
        debug!(
            "Picked release {} out of {}",
            release.id,
            randomizer.len()
        );
        Ok(AlbumPick::from_release(release))
    }
}
