//! Mirror a Discogs collection into a local snapshot and serve random picks from it.
pub mod config;
pub mod discogs;
mod error;
pub mod names;
pub mod randomizer;
pub mod routes;
pub mod service;
pub mod snapshot;
#[cfg(test)]
mod test_helpers;

pub use error::CollectionError;
