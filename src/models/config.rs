//! Configuration model.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// TVmaze configuration.
    pub tvmaze: TvMazeConfig,
    /// Rename behavior.
    pub rename: RenameConfig,
}

/// TVmaze configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TvMazeConfig {
    /// API base URL.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout: u64,
}

/// Rename behavior defaults; command line flags switch them on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenameConfig {
    /// Omit the show title from episode filenames.
    pub simple: bool,
    /// Do not ask for confirmation.
    pub no_confirm: bool,
    /// Descend into subdirectories.
    pub recursive: bool,
    /// Skip the TVmaze lookup.
    pub offline: bool,
}

impl Default for TvMazeConfig {
    fn default() -> Self {
        Self {
            base_url: std::env::var("TVMAZE_URL")
                .unwrap_or_else(|_| "https://api.tvmaze.com".to_string()),
            timeout: 30,
        }
    }
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("renamer")
}

/// Load configuration from file.
pub fn load_config() -> Config {
    let config_path = dirs_config_path().join("config.toml");

    if config_path.exists() {
        match std::fs::read_to_string(&config_path).map(|c| toml::from_str::<Config>(&c)) {
            Ok(Ok(config)) => return config,
            Ok(Err(e)) => tracing::warn!("Ignoring invalid {}: {}", config_path.display(), e),
            Err(e) => tracing::warn!("Could not read {}: {}", config_path.display(), e),
        }
    }

    Config::default()
}
