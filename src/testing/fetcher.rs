//! Scripted `CatalogFetcher` double.

use std::cell::Cell;

use crate::domain::AppError;
use crate::ports::CatalogFetcher;

#[derive(Debug, Clone)]
enum Response {
    Body(Vec<u8>),
    Unavailable(String),
}

/// Returns a fixed response and counts calls.
#[derive(Debug)]
pub struct ScriptedFetcher {
    response: Response,
    calls: Cell<usize>,
}

impl ScriptedFetcher {
    pub fn serving(body: &str) -> Self {
        Self { response: Response::Body(body.as_bytes().to_vec()), calls: Cell::new(0) }
    }

    pub fn serving_bytes(body: &[u8]) -> Self {
        Self { response: Response::Body(body.to_vec()), calls: Cell::new(0) }
    }

    pub fn unavailable(reason: &str) -> Self {
        Self { response: Response::Unavailable(reason.to_string()), calls: Cell::new(0) }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl CatalogFetcher for ScriptedFetcher {
    fn fetch(&self) -> Result<Vec<u8>, AppError> {
        self.calls.set(self.calls.get() + 1);
        match &self.response {
            Response::Body(body) => Ok(body.clone()),
            Response::Unavailable(reason) => Err(AppError::NetworkUnavailable(reason.clone())),
        }
    }
}
