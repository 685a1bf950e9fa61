use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Settings read from the optional TOML config file.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    pub port: Option<u16>,
    pub api_base_url: Option<String>,
    pub logging_level: Option<String>,
    pub frontend_dir_path: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
