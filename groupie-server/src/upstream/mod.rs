//! Client side of the remote artists API: fetch, decode and typed accessors.

mod client;
mod decoder;
mod error;
mod fetcher;
#[cfg(test)]
pub(crate) mod mock;
pub mod models;

pub use client::{
    UpstreamClient, ARTISTS_PATH, DATES_PATH, DEFAULT_API_BASE_URL, LOCATIONS_PATH, RELATION_PATH,
};
pub use decoder::decode;
pub use error::{FetchError, Resource, UpstreamError};
pub use fetcher::{Fetcher, HttpFetcher};
pub use models::{Artist, DateRecord, LocationRecord, RelationRecord};
