use std::path::{Path, PathBuf};

use crate::domain::{AppError, ScriptDocument};

/// Port for persisting a generated script where the user asked for it.
pub trait ScriptSink {
    /// Write the script verbatim and mark it executable.
    ///
    /// Returns the path actually written.
    fn persist(&self, path: &Path, script: &ScriptDocument) -> Result<PathBuf, AppError>;
}
