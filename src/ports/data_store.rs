//! Data-directory file operations.

use std::path::PathBuf;

use crate::domain::AppError;

/// Port for files kept in the application data directory
/// (catalog cache, user settings, app config).
///
/// All `name` arguments are file names relative to the data directory.
pub trait DataStore {
    /// Read a file as UTF-8 text.
    fn read_file(&self, name: &str) -> Result<String, AppError>;

    /// Replace a file's content. The previous content stays intact if the
    /// write fails part-way.
    fn write_file(&self, name: &str, content: &[u8]) -> Result<(), AppError>;

    /// Check whether a file exists.
    fn file_exists(&self, name: &str) -> bool;

    /// Absolute location of a file, for messages.
    fn resolve_path(&self, name: &str) -> PathBuf;
}
