//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::calculate::DEFAULT_TOP_SIZE;
use crate::loader::DataSource;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Where the two source documents live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Per-map statistics (file path or http(s) URL)
    #[serde(default = "default_stats_source")]
    pub stats_source: DataSource,

    /// Brawler type classification (file path or http(s) URL)
    #[serde(default = "default_types_source")]
    pub types_source: DataSource,

    /// Timeout for HTTP sources, in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_stats_source() -> DataSource {
    DataSource::File(PathBuf::from("./public/all_brawlers_by_map.json"))
}

fn default_types_source() -> DataSource {
    DataSource::File(PathBuf::from("./public/brawlerTypes.json"))
}

fn default_timeout() -> u64 {
    30
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            stats_source: default_stats_source(),
            types_source: default_types_source(),
            timeout_seconds: default_timeout(),
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,

    /// Directory served for non-API paths (front end, icons, the JSON files)
    #[serde(default = "default_static_dir")]
    pub static_dir: Option<PathBuf>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_origin() -> String {
    "*".to_string()
}

fn default_static_dir() -> Option<PathBuf> {
    Some(PathBuf::from("./public"))
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origin: default_cors_origin(),
            static_dir: default_static_dir(),
        }
    }
}

/// Ranking configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Size of the "top picks" set
    #[serde(default = "default_top_size")]
    pub top_size: usize,
}

fn default_top_size() -> usize {
    DEFAULT_TOP_SIZE
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_size: default_top_size(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub ranking: RankingConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            data: DataConfig::default(),
            server: ServerConfig::default(),
            ranking: RankingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise use defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("No config file at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data.stats_source.is_empty() || self.data.types_source.is_empty() {
            return Err(ConfigError::ValidationError(
                "Data sources must not be empty".to_string(),
            ));
        }

        if self.data.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError(
                "Data timeout must be greater than 0".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "Server port must be greater than 0".to_string(),
            ));
        }

        if self.ranking.top_size == 0 {
            return Err(ConfigError::ValidationError(
                "Top set size must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
