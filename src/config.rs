use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub list: ListConfig,
    pub clean: CleanConfig,
    pub watch: WatchConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Minimum file size in bytes to include in listings
    pub min_size: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanConfig {
    /// Remove .DS_Store files by default
    pub ds_store: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Refresh interval in seconds
    pub interval: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self { interval: 2 }
    }
}

impl Config {
    /// Load configuration from an explicit path, or from the default
    /// location when present, or fall back to defaults.
    ///
    /// An explicit path that cannot be read or parsed is an error; a missing
    /// default-location file is not.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        match path {
            Some(path) => Self::load_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_file(&path),
                _ => Ok(Config::default()),
            },
        }
    }

    fn load_file(path: &Path) -> Result<Config> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        let config = toml::from_str(&contents).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(config)
    }

    fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sysweep").join("config.toml"))
    }
}
