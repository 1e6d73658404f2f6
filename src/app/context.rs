use crate::ports::{CatalogFetcher, DataStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: CatalogFetcher, S: DataStore> {
    fetcher: F,
    store: S,
}

impl<F: CatalogFetcher, S: DataStore> AppContext<F, S> {
    /// Create a new application context.
    pub fn new(fetcher: F, store: S) -> Self {
        Self { fetcher, store }
    }

    /// Get a reference to the remote catalog fetcher.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Get a reference to the data-directory store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
