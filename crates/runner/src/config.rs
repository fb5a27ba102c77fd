//! Client configuration loaded from JSON

use std::path::Path;
use std::time::Duration;

use otc_gateway::{Endpoints, GatewayError, TransportConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable that replaces the token from the config file
pub const AUTH_TOKEN_ENV: &str = "OTC_AUTH_TOKEN";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("auth_token must not be empty")]
    MissingToken,
    #[error("timeout_seconds must be a positive number, got {0}")]
    InvalidTimeout(f64),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

fn default_timeout_seconds() -> f64 {
    TransportConfig::DEFAULT_TIMEOUT.as_secs_f64()
}

fn default_max_retries() -> u32 {
    TransportConfig::DEFAULT_MAX_ATTEMPTS
}

fn default_retry_backoff_ms() -> u64 {
    TransportConfig::DEFAULT_RETRY_BACKOFF.as_millis() as u64
}

/// Settings for connecting to the trading API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Sent verbatim as the `Authorization` header (e.g. `"Token abc"`)
    pub auth_token: String,
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: f64,
    /// Total attempts per request, including the first
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
    #[serde(default)]
    pub endpoints: Endpoints,
}

/// Load client configuration from a JSON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ClientConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Load configuration from a JSON string
pub fn load_config_from_str(json: &str) -> Result<ClientConfig, ConfigError> {
    let config: ClientConfig = serde_json::from_str(json)?;
    Ok(config)
}

impl ClientConfig {
    /// Replace the token when `token` is set and non-empty
    pub fn override_auth_token(&mut self, token: Option<String>) {
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            self.auth_token = token;
        }
    }

    /// Apply [`AUTH_TOKEN_ENV`] from the process environment
    pub fn apply_env_overrides(&mut self) {
        self.override_auth_token(std::env::var(AUTH_TOKEN_ENV).ok());
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auth_token.trim().is_empty() {
            return Err(ConfigError::MissingToken);
        }
        self.timeout()?;
        TransportConfig::new(&self.base_url, self.auth_token.as_str())?;
        Ok(())
    }

    /// Per-request timeout; must be positive and representable as a `Duration`
    pub fn timeout(&self) -> Result<Duration, ConfigError> {
        Duration::try_from_secs_f64(self.timeout_seconds)
            .ok()
            .filter(|timeout| !timeout.is_zero())
            .ok_or(ConfigError::InvalidTimeout(self.timeout_seconds))
    }

    /// Validated transport settings for this configuration
    pub fn transport_config(&self) -> Result<TransportConfig, ConfigError> {
        self.validate()?;
        Ok(TransportConfig::new(&self.base_url, self.auth_token.as_str())?
            .with_timeout(self.timeout()?)
            .with_max_attempts(self.max_retries)
            .with_retry_backoff(Duration::from_millis(self.retry_backoff_ms)))
    }
}
