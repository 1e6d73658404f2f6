//! dev-setup: pick developer tools from a YAML catalog and generate one
//! installer shell script for a Debian/Ubuntu machine.
//!
//! The catalog is fetched from a remote URL on each run and cached in the
//! data directory; when the remote is unreachable or serves a malformed
//! document, the last good cache is used instead.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    AppError, CatalogOrigin, CatalogSummary, CategorySummary, GenerateOptions, GenerateOutcome,
    InitOutcome, LoadedCatalog, OptionSummary, SessionOptions, SettingsView, WelcomeOutcome,
    generate, init, list, load_catalog, select_and_generate, settings_set_hide_on_startup,
    settings_show, synthesize_for, welcome,
};
