//! `app.toml` loading from the data directory.

use tracing::debug;

use crate::domain::{APP_CONFIG_FILE, AppConfig, AppError};
use crate::ports::DataStore;

/// Environment variable overriding the remote catalog URL.
pub const REMOTE_URL_ENV: &str = "DEV_SETUP_REMOTE_URL";

/// Load `app.toml` if present, else defaults; then apply environment overrides.
pub fn load_app_config(store: &impl DataStore) -> Result<AppConfig, AppError> {
    let config = if store.file_exists(APP_CONFIG_FILE) {
        let content = store.read_file(APP_CONFIG_FILE)?;
        AppConfig::parse(&content).map_err(|e| {
            AppError::config_error(format!(
                "Invalid {}: {}",
                store.resolve_path(APP_CONFIG_FILE).display(),
                e
            ))
        })?
    } else {
        debug!("No {} found, using defaults", APP_CONFIG_FILE);
        AppConfig::default()
    };

    match std::env::var(REMOTE_URL_ENV) {
        Ok(raw) if !raw.trim().is_empty() => config.with_remote_url(raw.trim()),
        _ => Ok(config),
    }
}
