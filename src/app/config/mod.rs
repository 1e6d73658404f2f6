//! Application configuration loading.

mod load_app_config;

pub use load_app_config::{REMOTE_URL_ENV, load_app_config};
