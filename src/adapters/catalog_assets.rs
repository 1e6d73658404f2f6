//! Embedded starter catalog.
//!
//! Used only by `init` to seed an empty data directory; catalog loading never
//! falls back to it.

use include_dir::{Dir, include_dir};

use crate::domain::{AppError, CATALOG_CACHE_FILE};

static CATALOG_ASSETS_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/catalog");

/// The bundled starter catalog document.
pub fn starter_catalog() -> Result<&'static str, AppError> {
    let file = CATALOG_ASSETS_DIR.get_file(CATALOG_CACHE_FILE).ok_or_else(|| {
        AppError::ConfigMalformed(format!("Missing embedded asset: {}", CATALOG_CACHE_FILE))
    })?;

    file.contents_utf8().ok_or_else(|| {
        AppError::ConfigMalformed(format!("Embedded asset is not valid UTF-8: {}", CATALOG_CACHE_FILE))
    })
}
