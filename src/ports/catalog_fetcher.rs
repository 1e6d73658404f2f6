//! Remote catalog source port.

use crate::domain::AppError;

/// Port for fetching the raw remote catalog document.
///
/// Implementations perform a single bounded attempt per call and report every
/// transport failure as `AppError::NetworkUnavailable`.
pub trait CatalogFetcher {
    /// Fetch the document bytes exactly as served.
    fn fetch(&self) -> Result<Vec<u8>, AppError>;
}

impl<T: CatalogFetcher + ?Sized> CatalogFetcher for Box<T> {
    fn fetch(&self) -> Result<Vec<u8>, AppError> {
        (**self).fetch()
    }
}

/// Fetcher used when remote synchronization is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineFetcher;

impl CatalogFetcher for OfflineFetcher {
    fn fetch(&self) -> Result<Vec<u8>, AppError> {
        Err(AppError::NetworkUnavailable("offline mode".to_string()))
    }
}
