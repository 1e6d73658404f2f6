//! Application configuration (`app.toml`).

use serde::Deserialize;
use url::Url;

use super::AppError;

/// Where the catalog lives upstream.
pub const DEFAULT_REMOTE_URL: &str =
    "https://raw.githubusercontent.com/peter-daptl/stygian-dev-tool-welcome-app/main/config.yaml";

/// Runtime configuration for catalog synchronization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Remote catalog document URL.
    #[serde(default = "default_remote_url")]
    pub remote_url: Url,
    /// Remote fetch timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// User-Agent header sent with the fetch.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Skip the remote fetch entirely.
    #[serde(default)]
    pub offline: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            remote_url: default_remote_url(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
            offline: false,
        }
    }
}

impl AppConfig {
    /// Parse `app.toml` content. Missing keys take their defaults.
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let config: AppConfig = toml::from_str(content)?;
        if config.timeout_secs == 0 {
            return Err(AppError::config_error("timeout_secs must be greater than zero"));
        }
        Ok(config)
    }

    /// Replace the remote URL from a string, validating it.
    pub fn with_remote_url(mut self, raw: &str) -> Result<Self, AppError> {
        self.remote_url = Url::parse(raw)
            .map_err(|e| AppError::config_error(format!("Invalid remote URL '{}': {}", raw, e)))?;
        Ok(self)
    }
}

fn default_remote_url() -> Url {
    Url::parse(DEFAULT_REMOTE_URL).expect("Default remote URL must be valid")
}

fn default_timeout() -> u64 {
    5
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
