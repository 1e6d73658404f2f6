//! In-memory `DataStore` double.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::DataStore;

/// In-memory data directory. Clones share the same backing map so tests can
/// inspect what production code wrote.
#[derive(Clone, Debug, Default)]
pub struct MemoryDataStore {
    files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    fail_writes: Arc<Mutex<bool>>,
}

impl MemoryDataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file.
    pub fn with_file(self, name: &str, content: &str) -> Self {
        self.files.lock().unwrap().insert(name.to_string(), content.as_bytes().to_vec());
        self
    }

    /// Make every subsequent write fail with a permission error.
    pub fn failing_writes(self) -> Self {
        *self.fail_writes.lock().unwrap() = true;
        self
    }

    pub fn contents(&self, name: &str) -> Option<String> {
        self.files.lock().unwrap().get(name).map(|b| String::from_utf8_lossy(b).into_owned())
    }
}

impl DataStore for MemoryDataStore {
    fn read_file(&self, name: &str) -> Result<String, AppError> {
        let files = self.files.lock().unwrap();
        let bytes = files.get(name).ok_or_else(|| {
            AppError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "Mock file not found"))
        })?;
        String::from_utf8(bytes.clone()).map_err(|e| {
            AppError::from(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })
    }

    fn write_file(&self, name: &str, content: &[u8]) -> Result<(), AppError> {
        if *self.fail_writes.lock().unwrap() {
            return Err(AppError::from(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "Mock write denied",
            )));
        }
        self.files.lock().unwrap().insert(name.to_string(), content.to_vec());
        Ok(())
    }

    fn file_exists(&self, name: &str) -> bool {
        self.files.lock().unwrap().contains_key(name)
    }

    fn resolve_path(&self, name: &str) -> PathBuf {
        PathBuf::from("/mock-data").join(name)
    }
}
