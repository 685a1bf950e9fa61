use axum::extract::FromRef;

use crate::artist_view::ArtistAggregator;
use crate::render::Renderer;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type GuardedRenderer = Arc<dyn Renderer>;

/// Shared, read-only handles. Nothing here is mutated by request handling.
#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub aggregator: ArtistAggregator,
    pub renderer: GuardedRenderer,
    pub hash: String,
}

impl FromRef<ServerState> for ArtistAggregator {
    fn from_ref(input: &ServerState) -> Self {
        input.aggregator.clone()
    }
}

impl FromRef<ServerState> for GuardedRenderer {
    fn from_ref(input: &ServerState) -> Self {
        input.renderer.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
