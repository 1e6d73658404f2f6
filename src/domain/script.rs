//! Installer script synthesis.
//!
//! Output is a pure function of the catalog and the selection: no clock, no
//! environment, no I/O. Categories and options are emitted in catalog order.

use super::{AppError, Catalog, SelectionSet};

/// Default file name offered when persisting a generated script.
pub const DEFAULT_SCRIPT_FILE_NAME: &str = "install-dev-env.sh";

const RULE_WIDTH: usize = 70;

const BASE_PACKAGES: &[&str] = &[
    "apt-transport-https",
    "ca-certificates",
    "gnupg",
    "lsb-release",
    "curl",
    "wget",
    "software-properties-common",
    "python3",
    "python3-venv",
    "unzip",
    "zip",
];

/// A fully generated installer script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptDocument {
    text: String,
}

impl ScriptDocument {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl std::fmt::Display for ScriptDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Generate the installer script for every selected option in `catalog`.
///
/// Fails with `EmptySelection` when no catalog option is selected; ids in the
/// selection that the catalog does not contain are ignored.
pub fn synthesize(catalog: &Catalog, selection: &SelectionSet) -> Result<ScriptDocument, AppError> {
    if selection.count_in(catalog) == 0 {
        return Err(AppError::EmptySelection);
    }

    let mut lines: Vec<String> = Vec::new();
    push_preamble(&mut lines, catalog);

    for category in &catalog.categories {
        lines.push(String::new());
        lines.push(format!("# --- {} ---", single_line(&category.name)));

        for option in &category.options {
            if !selection.is_selected(option.id.as_str()) {
                continue;
            }
            lines.push(String::new());
            let announcement = format!("Installing: {}...", single_line(&option.label));
            lines.push(format!("echo {}", shell_quote(&announcement)));
            lines.push(option.snippet.trim().to_string());
        }
    }

    push_epilogue(&mut lines);

    Ok(ScriptDocument { text: lines.join("\n") })
}

fn push_preamble(lines: &mut Vec<String>, catalog: &Catalog) {
    lines.push("#!/usr/bin/env bash".to_string());
    lines.push("# Generated by dev-setup (developer environment installer)".to_string());
    if !catalog.app_name.trim().is_empty() {
        let mut source = single_line(&catalog.app_name);
        if !catalog.app_version.trim().is_empty() {
            source.push_str(&format!(" {}", single_line(&catalog.app_version)));
        }
        lines.push(format!("# Catalog: {}", source));
    }
    lines.push("# Handles conflicts with existing installations".to_string());
    lines.push("# Avoids snap packages, uses apt repositories".to_string());
    lines.push("set -e".to_string());
    lines.push(String::new());
    lines.push("# Sudo check".to_string());
    lines.push(r#"if [ "$(id -u)" != "0" ]; then"#.to_string());
    lines.push(r#"  echo "Please run as root: sudo -E $0""#.to_string());
    lines.push("  exit 1".to_string());
    lines.push("fi".to_string());
    lines.push(String::new());
    lines.push("# Capture the actual user (not root)".to_string());
    lines.push("SUDO_USER=${SUDO_USER:-$USER}".to_string());
    lines.push("export DEBIAN_FRONTEND=noninteractive".to_string());
    lines.push(String::new());
    lines.push(r#"echo "Starting system update...""#.to_string());
    lines.push("apt update".to_string());
    lines.push(format!("apt install -y {}", BASE_PACKAGES.join(" ")));
    lines.push(String::new());
    lines.push("#".repeat(RULE_WIDTH));
}

fn push_epilogue(lines: &mut Vec<String>) {
    lines.push(String::new());
    lines.push("#".repeat(RULE_WIDTH));
    lines.push("# Cleanup".to_string());
    lines.push("echo 'Running cleanup...'".to_string());
    lines.push("apt autoremove -y".to_string());
    lines.push("apt clean".to_string());
    lines.push(String::new());
    lines.push(
        r#"echo "Installation complete! Please restart your terminal or log out and back in.""#
            .to_string(),
    );
}

/// Collapse line breaks so catalog text cannot escape a comment or echo line.
fn single_line(text: &str) -> String {
    text.trim().split(['\r', '\n']).filter(|s| !s.is_empty()).collect::<Vec<_>>().join(" ")
}

/// Wrap in single quotes, escaping embedded single quotes.
fn shell_quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', r"'\''"))
}
