mod file_config;

pub use file_config::FileConfig;

use crate::server::RequestsLoggingLevel;
use crate::upstream::DEFAULT_API_BASE_URL;
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::Path;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub port: u16,
    pub api_base_url: Option<String>,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub api_base_url: String,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let port = file.port.unwrap_or(cli.port);

        let api_base_url = file
            .api_base_url
            .or_else(|| cli.api_base_url.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let api_base_url = api_base_url.trim().trim_end_matches('/').to_string();
        if api_base_url.is_empty() {
            bail!("api_base_url must not be empty");
        }
        if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
            bail!("api_base_url must be an http(s) URL: {}", api_base_url);
        }

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let frontend_dir_path = file
            .frontend_dir_path
            .or_else(|| cli.frontend_dir_path.clone());
        if let Some(dir) = &frontend_dir_path {
            if !Path::new(dir).is_dir() {
                bail!("Frontend directory does not exist: {:?}", dir);
            }
        }

        Ok(Self {
            port,
            api_base_url,
            logging_level,
            frontend_dir_path,
        })
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
