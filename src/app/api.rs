//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::adapters::{
    DialoguerPicker, FilesystemDataStore, FilesystemScriptSink, HttpCatalogFetcher,
};
use crate::app::AppContext;
use crate::app::commands::{catalog_source, generate, init, list, select, settings, welcome};
use crate::app::config::load_app_config;
use crate::domain::settings::{GENERAL_SECTION, HIDE_ON_STARTUP_KEY};
use crate::domain::{
    AppConfig, Catalog, SETTINGS_FILE, SelectionSet, get_hide_on_startup, synthesize,
};
use crate::ports::{CatalogFetcher, DataStore, OfflineFetcher};

pub use crate::app::commands::catalog_source::{CatalogOrigin, LoadedCatalog};
pub use crate::app::commands::generate::{GenerateOptions, GenerateOutcome};
pub use crate::app::commands::init::InitOutcome;
pub use crate::app::commands::list::{CatalogSummary, CategorySummary, OptionSummary};
pub use crate::app::commands::welcome::WelcomeOutcome;
pub use crate::domain::AppError;

/// Options shared by every entry point.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Data directory override; defaults to `DEV_SETUP_HOME` or the platform config dir.
    pub data_dir: Option<PathBuf>,
    /// Skip the remote catalog fetch.
    pub offline: bool,
}

/// Settings as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsView {
    pub path: PathBuf,
    pub hide_on_startup: bool,
    /// Raw stored value, if any.
    pub raw_hide_on_startup: Option<String>,
}

type Context = AppContext<Box<dyn CatalogFetcher>, FilesystemDataStore>;

fn create_store(options: &SessionOptions) -> Result<FilesystemDataStore, AppError> {
    let root = match &options.data_dir {
        Some(dir) => dir.clone(),
        None => FilesystemDataStore::default_root()?,
    };
    debug!("Using data directory {}", root.display());
    Ok(FilesystemDataStore::new(root))
}

/// Create an `AppContext` for the given options.
fn create_context(options: &SessionOptions) -> Result<Context, AppError> {
    let store = create_store(options)?;
    let config = load_app_config(&store).unwrap_or_else(|err| {
        warn!("{}; using default settings", err);
        AppConfig::default()
    });

    let fetcher: Box<dyn CatalogFetcher> = if options.offline || config.offline {
        Box::new(OfflineFetcher)
    } else {
        Box::new(HttpCatalogFetcher::new(&config)?)
    };

    Ok(AppContext::new(fetcher, store))
}

/// Seed the data directory with the starter catalog if it has none.
pub fn init(options: &SessionOptions) -> Result<InitOutcome, AppError> {
    let store = create_store(options)?;
    init::execute(&store)
}

/// Resolve the catalog (remote first, cache fallback).
pub fn load_catalog(options: &SessionOptions) -> Result<LoadedCatalog, AppError> {
    let ctx = create_context(options)?;
    catalog_source::load(&ctx)
}

/// Summarize the catalog.
pub fn list(options: &SessionOptions) -> Result<CatalogSummary, AppError> {
    let loaded = load_catalog(options)?;
    Ok(list::execute(&loaded.catalog))
}

/// Generate an installer script for explicitly named options and categories.
pub fn generate(
    options: &SessionOptions,
    request: GenerateOptions,
) -> Result<GenerateOutcome, AppError> {
    let loaded = load_catalog(options)?;
    let selection =
        generate::build_selection(&loaded.catalog, &request.option_ids, &request.categories)?;
    generate::execute(&loaded.catalog, &selection, request.output.as_deref(), &FilesystemScriptSink)
}

/// Let the user pick options on the terminal, then generate.
///
/// `preselected` ids start checked. Returns `None` if the user aborted.
pub fn select_and_generate(
    options: &SessionOptions,
    preselected: &[String],
    output: Option<PathBuf>,
) -> Result<Option<GenerateOutcome>, AppError> {
    let loaded = load_catalog(options)?;
    let initial = generate::build_selection(&loaded.catalog, preselected, &[])?;
    let Some(selection) = select::execute(&loaded.catalog, initial, &DialoguerPicker)? else {
        return Ok(None);
    };
    generate::execute(&loaded.catalog, &selection, output.as_deref(), &FilesystemScriptSink)
        .map(Some)
}

/// Startup screen; `Hidden` when the user opted out (unless forced).
pub fn welcome(options: &SessionOptions, force: bool) -> Result<WelcomeOutcome, AppError> {
    let ctx = create_context(options)?;
    let loaded = catalog_source::load(&ctx)?;
    Ok(welcome::execute(ctx.store(), &loaded.catalog, force))
}

/// Current settings.
pub fn settings_show(options: &SessionOptions) -> Result<SettingsView, AppError> {
    let store = create_store(options)?;
    let loaded = settings::load(&store);
    Ok(SettingsView {
        path: store.resolve_path(SETTINGS_FILE),
        hide_on_startup: get_hide_on_startup(&loaded),
        raw_hide_on_startup: loaded.get(GENERAL_SECTION, HIDE_ON_STARTUP_KEY).map(str::to_string),
    })
}

/// Persist the startup preference.
pub fn settings_set_hide_on_startup(
    options: &SessionOptions,
    value: bool,
) -> Result<SettingsView, AppError> {
    let store = create_store(options)?;
    settings::set_hide_on_startup(&store, value)?;
    settings_show(options)
}

/// Generate from an already-loaded catalog without touching the filesystem.
pub fn synthesize_for(catalog: &Catalog, selected: &[String]) -> Result<String, AppError> {
    let selection: SelectionSet = generate::build_selection(catalog, selected, &[])?;
    Ok(synthesize(catalog, &selection)?.into_text())
}
