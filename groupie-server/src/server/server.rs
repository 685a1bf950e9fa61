use anyhow::{Context, Result};
use serde::Serialize;
use std::time::{Duration, Instant};
use tower_http::services::ServeDir;
use tracing::{error, info, warn};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    middleware,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};

use super::{log_requests, state::*, ServerConfig};
use crate::artist_view::ArtistAggregator;
use crate::render::Template;
use crate::upstream::UpstreamError;

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub hash: String,
    pub version: String,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

/// First `id` value of the query string, empty when absent.
fn first_artist_id(params: Vec<(String, String)>) -> String {
    params
        .into_iter()
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value)
        .unwrap_or_default()
}

async fn status(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        hash: state.hash.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    Json(stats)
}

fn upstream_error_response(err: UpstreamError) -> Response {
    let status = match &err {
        UpstreamError::Validation(_) => StatusCode::BAD_REQUEST,
        UpstreamError::ArtistNotFound(_) => StatusCode::NOT_FOUND,
        UpstreamError::Transport { .. } | UpstreamError::Decode { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    if err.is_client_error() {
        warn!("Rejected request: {}", err);
    } else {
        error!("Upstream failure: {}", err);
    }
    (status, err.to_string()).into_response()
}

fn render_page<T: Serialize>(renderer: &GuardedRenderer, template: Template, record: &T) -> Response {
    let record = match serde_json::to_value(record) {
        Ok(value) => value,
        Err(err) => {
            error!("Error serializing record for template {}: {}", template, err);
            return (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response();
        }
    };
    match renderer.render(template, &record) {
        Ok(markup) => Html(markup).into_response(),
        Err(err) => {
            error!("Error rendering template {}: {}", template, err);
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}

async fn get_artists(
    State(aggregator): State<ArtistAggregator>,
    State(renderer): State<GuardedRenderer>,
) -> Response {
    match aggregator.client().get_artists().await {
        Ok(artists) => render_page(&renderer, Template::Index, &artists),
        Err(err) => upstream_error_response(err),
    }
}

async fn get_artist_details(
    State(aggregator): State<ArtistAggregator>,
    State(renderer): State<GuardedRenderer>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    match aggregator.build_composite_view(&first_artist_id(params)).await {
        Ok(view) => render_page(&renderer, Template::Artist, &view),
        Err(err) => upstream_error_response(err),
    }
}

impl ServerState {
    fn new(
        config: ServerConfig,
        aggregator: ArtistAggregator,
        renderer: GuardedRenderer,
    ) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            aggregator,
            renderer,
            hash: env!("GIT_HASH").to_owned(),
        }
    }
}

pub fn make_app(
    config: ServerConfig,
    aggregator: ArtistAggregator,
    renderer: GuardedRenderer,
) -> Result<Router> {
    let state = ServerState::new(config.clone(), aggregator, renderer);

    let mut app: Router = Router::new()
        .route("/", get(get_artists))
        .route("/artist", get(get_artist_details))
        .route("/status", get(status))
        .with_state(state.clone());

    if let Some(frontend_path) = config.frontend_dir_path {
        app = app.nest_service("/static", ServeDir::new(frontend_path));
    }

    app = app.layer(middleware::from_fn_with_state(state, log_requests));

    Ok(app)
}

pub async fn run_server(
    config: ServerConfig,
    aggregator: ArtistAggregator,
    renderer: GuardedRenderer,
) -> Result<()> {
    let port = config.port;
    let app = make_app(config, aggregator, renderer)?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;

    info!("Server started at :{}", port);
    Ok(axum::serve(listener, app).await?)
}
