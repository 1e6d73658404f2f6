//! Shared testing utilities for dev-setup CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SMALL_CATALOG: &str = r#"app_name: Test Setup
app_version: "3.1"
categories:
  - name: Editors
    options:
      - id: vim
        label: Vim
        script: apt install -y vim
      - id: vscode
        label: VS Code
        script: snap install code --classic
  - name: Languages
    options:
      - id: rust
        label: Rust
        script: curl https://sh.rustup.rs -sSf | sh -s -- -y
      - id: go
        label: Go
        script: apt install -y golang
"#;

pub const REMOTE_CATALOG: &str = r#"app_name: Remote Setup
app_version: "9.0"
categories:
  - name: Shells
    options:
      - id: zsh
        label: Zsh
        script: apt install -y zsh
"#;

/// Testing harness providing an isolated data directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let data_dir = root.path().join("data");
        fs::create_dir_all(&data_dir).expect("Failed to create test data directory");
        Self { root, data_dir }
    }

    /// Scratch directory outside the data directory.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Build an offline command for invoking the compiled `dev-setup` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = self.cli_online();
        cmd.arg("--offline");
        cmd
    }

    /// Build a command that will contact whatever remote `app.toml` names.
    pub fn cli_online(&self) -> Command {
        let mut cmd = Command::cargo_bin("dev-setup").expect("Failed to locate dev-setup binary");
        cmd.current_dir(self.work_dir())
            .arg("--data-dir")
            .arg(self.data_dir())
            .env_remove("DEV_SETUP_HOME")
            .env_remove("DEV_SETUP_REMOTE_URL")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Point the remote catalog at `url` with a short timeout.
    pub fn use_remote(&self, url: &str) {
        let content = format!("remote_url = \"{}\"\ntimeout_secs = 2\n", url);
        fs::write(self.data_dir.join("app.toml"), content).expect("Failed to write app.toml");
    }

    pub fn seed_cache(&self, content: &str) {
        fs::write(self.cache_path(), content).expect("Failed to seed catalog cache");
    }

    pub fn cache_path(&self) -> PathBuf {
        self.data_dir.join("config.yaml")
    }

    pub fn read_cache(&self) -> String {
        fs::read_to_string(self.cache_path()).expect("Failed to read catalog cache")
    }

    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join("user_settings.ini")
    }
}
