//! Discogs collection API: record model, HTTP client, and the sync procedure
//! that mirrors a collection folder into a local snapshot.
mod client;
mod models;
mod sync;

pub use client::{CollectionSource, DiscogsClient, DiscogsError, DiscogsSession};
pub use models::{
    Artist, BasicInformation, CollectionPage, Format, Label, Note, Pagination, PaginationUrls,
    Release,
};
pub use sync::{fetch_all, sync_collection};
