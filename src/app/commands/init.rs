//! Seed the data directory with the bundled starter catalog.

use std::path::PathBuf;

use crate::adapters::catalog_assets::starter_catalog;
use crate::domain::{AppError, CATALOG_CACHE_FILE};
use crate::ports::DataStore;

/// Outcome of `init`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    /// Starter catalog written to this path.
    Created(PathBuf),
    /// A cache already existed and was left alone.
    AlreadyPresent(PathBuf),
}

/// Write the starter catalog unless a cache already exists.
pub fn execute(store: &impl DataStore) -> Result<InitOutcome, AppError> {
    let path = store.resolve_path(CATALOG_CACHE_FILE);
    if store.file_exists(CATALOG_CACHE_FILE) {
        return Ok(InitOutcome::AlreadyPresent(path));
    }

    store.write_file(CATALOG_CACHE_FILE, starter_catalog()?.as_bytes())?;
    Ok(InitOutcome::Created(path))
}
