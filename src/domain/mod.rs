pub mod app_config;
pub mod catalog;
pub mod error;
pub mod option_id;
pub mod script;
pub mod selection;
pub mod settings;

pub use app_config::AppConfig;
pub use catalog::{Catalog, CatalogOption, Category};
pub use error::AppError;
pub use option_id::OptionId;
pub use script::{DEFAULT_SCRIPT_FILE_NAME, ScriptDocument, synthesize};
pub use selection::SelectionSet;
pub use settings::{UserSettings, get_hide_on_startup, set_hide_on_startup};

/// Catalog cache file name inside the data directory.
pub const CATALOG_CACHE_FILE: &str = "config.yaml";
/// Settings file name inside the data directory.
pub const SETTINGS_FILE: &str = "user_settings.ini";
/// Application configuration file name inside the data directory.
pub const APP_CONFIG_FILE: &str = "app.toml";
