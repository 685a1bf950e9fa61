//! Groupie Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod artist_view;
pub mod config;
pub mod render;
pub mod server;
pub mod upstream;

// Re-export commonly used types for convenience
pub use artist_view::{ArtistAggregator, ArtistView};
pub use render::{HtmlRenderer, Renderer, Template};
pub use server::{make_app, run_server, RequestsLoggingLevel, ServerConfig};
pub use upstream::{Fetcher, HttpFetcher, UpstreamClient, UpstreamError};
