use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for dev-setup operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Remote catalog could not be fetched (timeout, DNS, HTTP status, refused).
    #[error("Remote catalog unavailable: {0}")]
    NetworkUnavailable(String),

    /// No catalog cache exists at the expected location.
    #[error("Configuration file '{}' not found", .0.display())]
    ConfigMissing(PathBuf),

    /// Catalog document exists but does not have the expected shape.
    #[error("Malformed catalog: {0}")]
    ConfigMalformed(String),

    /// Synthesis requested with nothing selected.
    #[error("No options selected. Select at least one tool to install.")]
    EmptySelection,

    /// Option identifier is invalid.
    #[error("Invalid option identifier '{0}': must not be empty")]
    InvalidOptionId(String),

    /// Selection names an option the catalog does not contain.
    #[error("Option '{id}' not found. Available: {available}")]
    UnknownOption { id: String, available: String },

    /// Category name not present in the catalog.
    #[error("Category '{name}' not found. Available: {available}")]
    UnknownCategory { name: String, available: String },

    /// Settings value could not be interpreted.
    #[error("Invalid value '{value}' for setting '{key}'")]
    SettingsValue { key: String, value: String },

    /// Application configuration (app.toml) issue.
    #[error("{0}")]
    AppConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Interactive prompt failed.
    #[error("Prompt failed: {0}")]
    PromptError(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::AppConfig(message.into())
    }

    /// Only the absence of a usable catalog may terminate startup.
    pub fn is_fatal_to_startup(&self) -> bool {
        matches!(self, AppError::ConfigMissing(_) | AppError::ConfigMalformed(_))
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting it.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::ConfigMalformed(_)
            | AppError::EmptySelection
            | AppError::InvalidOptionId(_)
            | AppError::SettingsValue { .. }
            | AppError::AppConfig(_)
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::ConfigMissing(_)
            | AppError::UnknownOption { .. }
            | AppError::UnknownCategory { .. } => io::ErrorKind::NotFound,
            AppError::NetworkUnavailable(_) | AppError::PromptError(_) => io::ErrorKind::Other,
        }
    }
}
