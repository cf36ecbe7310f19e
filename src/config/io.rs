use super::models::AppConfig;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Load the config file, falling back to defaults if missing or invalid.
pub fn load_config(path: &Path) -> AppConfig {
    match fs::read_to_string(path) {
        Ok(data) => parse_config(&data),
        Err(err) => {
            info!(path = %path.display(), "No config file, using defaults: {err}");
            AppConfig::default()
        }
    }
}

pub fn parse_config(data: &str) -> AppConfig {
    match toml::from_str(data) {
        Ok(config) => config,
        Err(err) => {
            warn!("Invalid config, using defaults: {err}");
            AppConfig::default()
        }
    }
}
