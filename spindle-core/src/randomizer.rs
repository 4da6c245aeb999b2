use crate::discogs::Release;
use crate::error::CollectionError;
use crate::snapshot::SnapshotStore;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Uniform random picks over a loaded snapshot.
///
/// Each pick is independent: the same release can come up twice in a row.
#[derive(Debug, Clone)]
pub struct Randomizer {
    releases: Vec<Release>,
}

impl Randomizer {
    /// Load the current snapshot. Fails with a not-found snapshot error if
    /// there is no file; creating a placeholder is left to
    /// [`SnapshotStore::ensure_exists`].
    pub fn load(store: &SnapshotStore) -> Result<Self, CollectionError> {
        Ok(Self::from_releases(store.load()?))
    }

    pub fn from_releases(releases: Vec<Release>) -> Self {
        Self { releases }
    }

    pub fn len(&self) -> usize {
        self.releases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }

    pub fn pick_random(&self) -> Result<&Release, CollectionError> {
        self.pick_with(&mut rand::rng())
    }

    pub fn pick_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Release, CollectionError> {
        self.releases
            .choose(rng)
            .ok_or(CollectionError::EmptyCollection)
    }
}
