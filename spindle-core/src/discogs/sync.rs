use crate::discogs::client::{CollectionSource, DiscogsError};
use crate::discogs::models::Release;
use crate::error::CollectionError;
use crate::snapshot::{SnapshotError, SnapshotStore};
use tracing::{debug, info, warn};

/// Fetch a folder page by page, starting at page 1.
///
/// The page count is taken from the first page and not re-read afterwards.
/// Discogs gives no consistency guarantee across requests, so items added or
/// removed mid-sweep can shift page boundaries and cause a duplicate or a
/// missed release. The next count change will trigger another full fetch.
pub async fn fetch_all<S>(
    source: &S,
    folder_id: u64,
    per_page: u32,
    first_page_only: bool,
) -> Result<Vec<Release>, DiscogsError>
where
    S: CollectionSource + ?Sized,
{
    let first = source.fetch_page(folder_id, 1, per_page).await?;
    let total_pages = first.pagination.pages;
    let mut releases = first.releases;

    if first_page_only {
        return Ok(releases);
    }

    let mut page = 1;
    while page < total_pages {
        page += 1;
        let next = source.fetch_page(folder_id, page, per_page).await?;
        debug!(
            "Fetched page {}/{} ({} release(s))",
            page,
            total_pages,
            next.releases.len()
        );
        releases.extend(next.releases);
    }

    info!(
        "Fetched {} release(s) from folder {} in {} page(s)",
        releases.len(),
        folder_id,
        total_pages.max(1)
    );
    Ok(releases)
}

/// Bring the snapshot in line with the remote folder.
///
/// Compares the remote item count against the snapshot length and re-fetches
/// the whole folder only when they differ or no usable snapshot exists.
/// Same-count edits (a changed rating, a swapped release) are not detected.
///
/// Returns true if the snapshot was rewritten. Nothing is written unless the
/// full fetch succeeds.
pub async fn sync_collection<S>(
    source: &S,
    folder_id: u64,
    per_page: u32,
    store: &SnapshotStore,
) -> Result<bool, CollectionError>
where
    S: CollectionSource + ?Sized,
{
    // per_page=1 keeps the count probe to a single tiny response
    let probe = source.fetch_page(folder_id, 1, 1).await?;
    let remote_count = probe.pagination.items;

    let local_count = match store.load() {
        Ok(existing) => Some(existing.len() as u64),
        Err(SnapshotError::NotFound(path)) => {
            info!(
                "No snapshot at {}, performing full sync",
                path.display()
            );
            None
        }
        Err(SnapshotError::Corrupt { path, source }) => {
            warn!(
                "Snapshot at {} is unreadable ({}), performing full sync",
                path.display(),
                source
            );
            None
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(local_count) = local_count {
        if local_count == remote_count {
            info!("Item count unchanged ({}), skipping update", local_count);
            return Ok(false);
        }
        info!("Item count changed: {} -> {}", local_count, remote_count);
    }

    let releases = fetch_all(source, folder_id, per_page, false).await?;
    store.write(&releases)?;

    info!(
        "Snapshot updated with {} release(s) at {}",
        releases.len(),
        store.path().display()
    );
    Ok(true)
}
