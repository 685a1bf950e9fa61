//! Error kinds for the upstream fetch/decode pipeline.

use std::fmt;
use thiserror::Error;

/// The upstream resource a request was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Artists,
    Artist,
    Locations,
    Dates,
    Relations,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Artists => "artists",
            Resource::Artist => "artist",
            Resource::Locations => "locations",
            Resource::Dates => "dates",
            Resource::Relations => "relations",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Connection-level failure while talking to the upstream API.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Error fetching {resource}: {source}")]
    Transport {
        resource: Resource,
        #[source]
        source: FetchError,
    },

    #[error("Error decoding {resource}: {source}")]
    Decode {
        resource: Resource,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0}")]
    Validation(String),

    #[error("Artist not found: {0}")]
    ArtistNotFound(String),
}

impl UpstreamError {
    /// Whether the failure was caused by the caller's input rather than upstream.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            UpstreamError::Validation(_) | UpstreamError::ArtistNotFound(_)
        )
    }
}
