//! Configuration management using the prefer crate for discovery.
//!
//! A config file is optional. Secrets normally come from the environment
//! (`GOOGLE_API_KEY`, `OPENAI_API_KEY`), optionally via a `.env` file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::llm::LlmConfig;
use crate::providers::{GoogleConfig, NominatimConfig, USER_AGENT};

/// Name used for config file discovery.
pub const CONFIG_NAME: &str = "rescue-assistant";

/// Default listen address.
pub const DEFAULT_BIND: &str = "127.0.0.1:8501";

/// Default timeout for geocoding and places requests.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Errors raised while loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Listen address for `serve` (port, host, or host:port).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind: Option<String>,
    /// User agent for provider requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Timeout for geocoding and places requests, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
    /// Google geocoding and places.
    #[serde(default, skip_serializing_if = "GoogleConfig::is_default")]
    pub google: GoogleConfig,
    /// Nominatim reverse geocoding.
    #[serde(default, skip_serializing_if = "NominatimConfig::is_default")]
    pub nominatim: NominatimConfig,
    /// Language model used for rescue plans.
    #[serde(default, skip_serializing_if = "LlmConfig::is_default")]
    pub llm: LlmConfig,
    /// Path to the config file this was loaded from (not serialized).
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration using prefer crate for discovery.
    /// Falls back to defaults (plus environment) when no file is found.
    pub async fn load() -> Self {
        match prefer::load(CONFIG_NAME).await {
            Ok(pref_config) => {
                if let Some(path) = pref_config.source_path() {
                    match Self::load_from_path(path).await {
                        Ok(config) => config,
                        Err(e) => {
                            tracing::warn!("{}; using defaults", e);
                            Self::default_with_env()
                        }
                    }
                } else {
                    Self::default_with_env()
                }
            }
            Err(_) => Self::default_with_env(),
        }
    }

    /// Create a default config with environment variable overrides applied.
    pub fn default_with_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Load configuration from a specific file path.
    /// Supports JSON, TOML and YAML based on file extension.
    pub async fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");
        let parse_error = |message: String| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        };

        let mut config: Config = match ext {
            "toml" => toml::from_str(&contents).map_err(|e| parse_error(e.to_string()))?,
            "yaml" | "yml" => {
                serde_yaml::from_str(&contents).map_err(|e| parse_error(e.to_string()))?
            }
            _ => serde_json::from_str(&contents).map_err(|e| parse_error(e.to_string()))?,
        };

        config.source_path = Some(path.to_path_buf());
        Ok(config.with_env_overrides())
    }

    /// Apply environment variable overrides to this config and its sections.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(val) = std::env::var("RESCUE_BIND") {
            self.bind = Some(val);
        }
        self.google = self.google.with_env_overrides();
        self.nominatim = self.nominatim.with_env_overrides();
        self.llm = self.llm.with_env_overrides();
        self
    }

    pub fn bind(&self) -> &str {
        self.bind.as_deref().unwrap_or(DEFAULT_BIND)
    }

    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(USER_AGENT)
    }

    /// Timeout applied to geocoding, reverse geocoding and places calls.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }
}

/// Parse a bind address that can be:
/// - Just a port: "8501" -> 127.0.0.1:8501
/// - Just a host: "0.0.0.0" -> 0.0.0.0:8501
/// - Host and port: "0.0.0.0:8501" -> 0.0.0.0:8501
pub fn parse_bind_address(bind: &str) -> (String, u16) {
    if let Ok(port) = bind.parse::<u16>() {
        return ("127.0.0.1".to_string(), port);
    }

    if let Some((host, port_str)) = bind.rsplit_once(':') {
        if let Ok(port) = port_str.parse::<u16>() {
            return (host.to_string(), port);
        }
    }

    (bind.to_string(), 8501)
}
