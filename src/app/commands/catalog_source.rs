//! Catalog resolution: remote document first, local cache as fallback.

use tracing::{info, warn};

use crate::app::AppContext;
use crate::domain::{AppError, CATALOG_CACHE_FILE, Catalog};
use crate::ports::{CatalogFetcher, DataStore};

/// Where the returned catalog came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogOrigin {
    /// Freshly fetched and committed to the cache.
    Remote,
    /// Read from the local cache; `reason` says why the remote copy was not used.
    Cache { reason: String },
}

/// A loaded catalog plus its provenance.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    pub origin: CatalogOrigin,
}

/// Resolve the catalog.
///
/// A fetched document replaces the cache only after it parses and validates,
/// so a bad upstream deployment never clobbers a good cache. Network and
/// remote-parse failures are logged and fall back to the cache; only a
/// missing or malformed cache is an error.
pub fn load<F, S>(ctx: &AppContext<F, S>) -> Result<LoadedCatalog, AppError>
where
    F: CatalogFetcher,
    S: DataStore,
{
    let reason = match fetch_remote(ctx.fetcher()) {
        Ok((catalog, raw)) => {
            if let Err(err) = ctx.store().write_file(CATALOG_CACHE_FILE, &raw) {
                warn!(
                    "Could not update {}: {}",
                    ctx.store().resolve_path(CATALOG_CACHE_FILE).display(),
                    err
                );
            } else {
                info!("Catalog updated from remote");
            }
            return Ok(LoadedCatalog { catalog, origin: CatalogOrigin::Remote });
        }
        Err(err) => err.to_string(),
    };

    warn!("{}; using local {}", reason, CATALOG_CACHE_FILE);
    let catalog = load_cached(ctx.store())?;
    Ok(LoadedCatalog { catalog, origin: CatalogOrigin::Cache { reason } })
}

/// Read and parse the local cache without touching the network.
pub fn load_cached(store: &impl DataStore) -> Result<Catalog, AppError> {
    if !store.file_exists(CATALOG_CACHE_FILE) {
        return Err(AppError::ConfigMissing(store.resolve_path(CATALOG_CACHE_FILE)));
    }

    let content = store.read_file(CATALOG_CACHE_FILE).map_err(|err| match err {
        AppError::Io(io) if io.kind() == std::io::ErrorKind::InvalidData => {
            AppError::ConfigMalformed(format!("Catalog cache is not valid UTF-8: {}", io))
        }
        other => other,
    })?;
    Catalog::parse(&content)
}

fn fetch_remote(fetcher: &impl CatalogFetcher) -> Result<(Catalog, Vec<u8>), AppError> {
    let raw = fetcher.fetch()?;
    let text = std::str::from_utf8(&raw)
        .map_err(|e| AppError::ConfigMalformed(format!("Remote catalog is not valid UTF-8: {}", e)))?;
    let catalog = Catalog::parse(text).map_err(|err| match err {
        AppError::ConfigMalformed(msg) => {
            AppError::ConfigMalformed(format!("Remote catalog rejected: {}", msg))
        }
        other => other,
    })?;
    Ok((catalog, raw))
}
