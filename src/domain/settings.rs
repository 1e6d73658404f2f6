//! Persisted user preferences in an INI-style document.
//!
//! Parsing is lenient: lines that do not fit the format are skipped, and keys
//! outside any section are ignored. Section and key order is preserved.

use super::AppError;

pub const GENERAL_SECTION: &str = "General";
pub const HIDE_ON_STARTUP_KEY: &str = "hide_on_startup";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

/// Mapping of (section, key) to string value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSettings {
    sections: Vec<Section>,
}

impl UserSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse INI text, dropping anything unrecognizable.
    pub fn parse(content: &str) -> Self {
        let mut settings = Self::new();
        let mut current: Option<String> = None;

        for raw in content.lines() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if let Some(rest) = line.strip_prefix('[') {
                current = rest
                    .strip_suffix(']')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string);
                if let Some(name) = &current {
                    settings.section_mut(name);
                }
                continue;
            }

            let Some(section) = &current else {
                continue;
            };
            let Some(split_at) = line.find(['=', ':']) else {
                continue;
            };
            let key = line[..split_at].trim();
            if key.is_empty() {
                continue;
            }
            let value = line[split_at + 1..].trim();
            settings.set(section, key, value);
        }

        settings
    }

    /// Render as INI text. Sections are separated by a blank line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for section in &self.sections {
            out.push_str(&format!("[{}]\n", section.name));
            for (key, value) in &section.entries {
                out.push_str(&format!("{} = {}\n", key, value));
            }
            out.push('\n');
        }
        out
    }

    /// Keys are case-insensitive; section names are not.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        let key = key.to_ascii_lowercase();
        self.sections
            .iter()
            .find(|s| s.name == section)?
            .entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        let key = key.to_ascii_lowercase();
        let entries = &mut self.section_mut(section).entries;
        match entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => entries.push((key, value.to_string())),
        }
    }

    /// Boolean view of a value; `None` when absent or not a boolean.
    pub fn get_bool(&self, section: &str, key: &str) -> Option<bool> {
        self.get(section, key).and_then(|v| parse_bool(v).ok())
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    fn section_mut(&mut self, name: &str) -> &mut Section {
        let index = match self.sections.iter().position(|s| s.name == name) {
            Some(index) => index,
            None => {
                self.sections.push(Section { name: name.to_string(), entries: Vec::new() });
                self.sections.len() - 1
            }
        };
        &mut self.sections[index]
    }
}

/// Whether the startup screen should be skipped. Defaults to false.
pub fn get_hide_on_startup(settings: &UserSettings) -> bool {
    settings.get_bool(GENERAL_SECTION, HIDE_ON_STARTUP_KEY).unwrap_or(false)
}

/// Return a copy of `settings` with the startup flag set.
pub fn set_hide_on_startup(settings: &UserSettings, value: bool) -> UserSettings {
    let mut updated = settings.clone();
    updated.set(GENERAL_SECTION, HIDE_ON_STARTUP_KEY, canonical_bool(value));
    updated
}

/// Canonical stored form of a boolean.
pub fn canonical_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// Accepts the usual INI spellings: 1/yes/true/on and 0/no/false/off.
pub fn parse_bool(value: &str) -> Result<bool, AppError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "yes" | "true" | "on" => Ok(true),
        "0" | "no" | "false" | "off" => Ok(false),
        _ => Err(AppError::SettingsValue {
            key: HIDE_ON_STARTUP_KEY.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_settings_default_to_showing() {
        assert!(!get_hide_on_startup(&UserSettings::new()));
    }

    #[test]
    fn parses_general_flag() {
        let settings = UserSettings::parse("[General]\nhide_on_startup = True\n");
        assert!(get_hide_on_startup(&settings));
    }

    #[test]
    fn accepts_colon_separator_and_other_spellings() {
        let settings = UserSettings::parse("[General]\nHIDE_ON_STARTUP: yes\n");
        assert!(get_hide_on_startup(&settings));

        let settings = UserSettings::parse("[General]\nhide_on_startup=0\n");
        assert!(!get_hide_on_startup(&settings));
    }

    #[test]
    fn unparsable_flag_reads_as_false() {
        let settings = UserSettings::parse("[General]\nhide_on_startup = maybe\n");
        assert!(!get_hide_on_startup(&settings));
        assert_eq!(settings.get(GENERAL_SECTION, HIDE_ON_STARTUP_KEY), Some("maybe"));
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let content = "orphan = 1\n[General\nhide_on_startup = True\n[General]\nnot a pair\n";
        let settings = UserSettings::parse(content);

        // `[General` is not a header, so the first assignment has no section.
        assert_eq!(settings.render(), "[General]\n\n");
        assert!(!get_hide_on_startup(&settings));
    }

    #[test]
    fn set_returns_updated_copy() {
        let original = UserSettings::new();
        let updated = set_hide_on_startup(&original, true);

        assert!(original.is_empty());
        assert_eq!(updated.get(GENERAL_SECTION, HIDE_ON_STARTUP_KEY), Some("True"));
        assert_eq!(updated.render(), "[General]\nhide_on_startup = True\n\n");

        let reverted = set_hide_on_startup(&updated, false);
        assert_eq!(reverted.get(GENERAL_SECTION, HIDE_ON_STARTUP_KEY), Some("False"));
    }

    #[test]
    fn render_preserves_unrelated_sections() {
        let content = "[Window]\nwidth = 1280\n\n[General]\nhide_on_startup = False\n\n";
        let settings = UserSettings::parse(content);

        assert_eq!(settings.render(), content);
        assert_eq!(UserSettings::parse(&settings.render()), settings);
    }

    #[test]
    fn parse_bool_rejects_garbage() {
        assert!(parse_bool("TRUE").unwrap());
        assert!(!parse_bool(" off ").unwrap());
        assert!(matches!(parse_bool("2"), Err(AppError::SettingsValue { .. })));
    }
}
