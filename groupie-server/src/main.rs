use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use groupie_server::config::{AppConfig, CliConfig, FileConfig};
use groupie_server::upstream::DEFAULT_API_BASE_URL;
use groupie_server::{
    run_server, ArtistAggregator, HtmlRenderer, HttpFetcher, RequestsLoggingLevel, ServerConfig,
    UpstreamClient,
};

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to a TOML config file. Values in the file override CLI flags.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 8080)]
    pub port: u16,

    /// Base URL of the artists API.
    #[clap(long, default_value = DEFAULT_API_BASE_URL)]
    pub api_base_url: String,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Path to a directory of static assets served under /static.
    #[clap(long)]
    pub frontend_dir_path: Option<String>,
}

impl CliArgs {
    fn to_cli_config(&self) -> CliConfig {
        CliConfig {
            port: self.port,
            api_base_url: Some(self.api_base_url.clone()),
            logging_level: self.logging_level.clone(),
            frontend_dir_path: self.frontend_dir_path.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config from {:?}...", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let config = AppConfig::resolve(&cli_args.to_cli_config(), file_config)?;

    info!("Using artists API at {}", config.api_base_url);
    let fetcher = Arc::new(HttpFetcher::new().context("Failed to create HTTP client")?);
    let aggregator = ArtistAggregator::new(UpstreamClient::new(fetcher, &config.api_base_url));

    let server_config = ServerConfig {
        requests_logging_level: config.logging_level,
        port: config.port,
        frontend_dir_path: config.frontend_dir_path,
    };

    info!("Ready to serve at port {}!", config.port);
    run_server(server_config, aggregator, Arc::new(HtmlRenderer::new())).await
}
