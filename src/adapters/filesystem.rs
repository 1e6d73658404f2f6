//! Filesystem adapters for the data directory and generated scripts.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, ScriptDocument};
use crate::ports::{DataStore, ScriptSink};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "DEV_SETUP_HOME";

/// Filesystem-backed store rooted at the application data directory.
#[derive(Debug, Clone)]
pub struct FilesystemDataStore {
    root: PathBuf,
}

impl FilesystemDataStore {
    /// Create a store rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Resolve the data directory: `DEV_SETUP_HOME`, else the platform config dir.
    pub fn default_root() -> Result<PathBuf, AppError> {
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(dir));
        }
        dirs::config_dir().map(|dir| dir.join(env!("CARGO_PKG_NAME"))).ok_or_else(|| {
            AppError::config_error(format!(
                "Could not determine a configuration directory; set {}",
                DATA_DIR_ENV
            ))
        })
    }

    /// The data directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn full_path(&self, name: &str) -> Result<PathBuf, AppError> {
        let relative = Path::new(name);
        if relative.is_absolute() || relative.components().count() != 1 {
            return Err(AppError::config_error(format!(
                "Data file name must be a plain file name: {}",
                name
            )));
        }
        Ok(self.root.join(relative))
    }
}

impl DataStore for FilesystemDataStore {
    fn read_file(&self, name: &str) -> Result<String, AppError> {
        fs::read_to_string(self.full_path(name)?).map_err(AppError::from)
    }

    fn write_file(&self, name: &str, content: &[u8]) -> Result<(), AppError> {
        let target = self.full_path(name)?;
        fs::create_dir_all(&self.root)?;
        write_atomically(&target, content)
    }

    fn file_exists(&self, name: &str) -> bool {
        self.full_path(name).map(|p| p.is_file()).unwrap_or(false)
    }

    fn resolve_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

/// Write to a sibling temp file, flush it to disk, then rename over the target.
fn write_atomically(target: &Path, content: &[u8]) -> Result<(), AppError> {
    let file_name = target
        .file_name()
        .ok_or_else(|| AppError::config_error(format!("Invalid file path: {}", target.display())))?;
    let tmp = target.with_file_name(format!(".{}.tmp", file_name.to_string_lossy()));

    let written = (|| -> std::io::Result<()> {
        let mut file = File::create(&tmp)?;
        file.write_all(content)?;
        file.sync_all()
    })();

    if let Err(err) = written.and_then(|_| fs::rename(&tmp, target)) {
        let _ = fs::remove_file(&tmp);
        return Err(err.into());
    }
    Ok(())
}

/// Writes generated scripts to arbitrary user-chosen paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemScriptSink;

impl ScriptSink for FilesystemScriptSink {
    fn persist(&self, path: &Path, script: &ScriptDocument) -> Result<PathBuf, AppError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut file = File::create(path)?;
        file.write_all(script.text().as_bytes())?;
        file.sync_all()?;
        drop(file);

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(path)?.permissions();
            perms.set_mode(0o755);
            fs::set_permissions(path, perms)?;
        }

        Ok(path.to_path_buf())
    }
}
