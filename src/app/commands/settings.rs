//! Persisted user preference commands.

use std::io::ErrorKind;

use tracing::warn;

use crate::domain::settings::{self, UserSettings};
use crate::domain::{AppError, SETTINGS_FILE};
use crate::ports::DataStore;

/// Load settings. Never fails: an absent, unreadable or malformed file
/// yields whatever could be recognized, possibly nothing.
pub fn load(store: &impl DataStore) -> UserSettings {
    if !store.file_exists(SETTINGS_FILE) {
        return UserSettings::new();
    }
    match store.read_file(SETTINGS_FILE) {
        Ok(content) => UserSettings::parse(&content),
        Err(AppError::Io(err)) if err.kind() == ErrorKind::NotFound => UserSettings::new(),
        Err(err) => {
            warn!("Could not read {}: {}", store.resolve_path(SETTINGS_FILE).display(), err);
            UserSettings::new()
        }
    }
}

/// Write the full settings document back.
pub fn save(store: &impl DataStore, settings: &UserSettings) -> Result<(), AppError> {
    store.write_file(SETTINGS_FILE, settings.render().as_bytes())
}

/// Current value of the startup flag.
pub fn hide_on_startup(store: &impl DataStore) -> bool {
    settings::get_hide_on_startup(&load(store))
}

/// Update and persist the startup flag, keeping every other entry.
pub fn set_hide_on_startup(store: &impl DataStore, value: bool) -> Result<UserSettings, AppError> {
    let updated = settings::set_hide_on_startup(&load(store), value);
    save(store, &updated)?;
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryDataStore;

    #[test]
    fn absent_file_loads_empty() {
        let store = MemoryDataStore::new();
        assert!(load(&store).is_empty());
        assert!(!hide_on_startup(&store));
    }

    #[test]
    fn set_persists_canonical_value() {
        let store = MemoryDataStore::new();

        set_hide_on_startup(&store, true).unwrap();

        assert_eq!(store.contents(SETTINGS_FILE).unwrap(), "[General]\nhide_on_startup = True\n\n");
        assert!(hide_on_startup(&store));
    }

    #[test]
    fn set_keeps_unrelated_entries() {
        let store =
            MemoryDataStore::new().with_file(SETTINGS_FILE, "[Window]\nwidth = 1280\n");

        set_hide_on_startup(&store, false).unwrap();

        let content = store.contents(SETTINGS_FILE).unwrap();
        assert!(content.contains("[Window]\nwidth = 1280\n"));
        assert!(content.contains("[General]\nhide_on_startup = False\n"));
    }

    #[test]
    fn save_of_load_keeps_flag_semantics() {
        let store =
            MemoryDataStore::new().with_file(SETTINGS_FILE, "[General]\nHide_On_Startup: yes\n");

        save(&store, &load(&store)).unwrap();

        assert!(hide_on_startup(&store));
    }

    #[test]
    fn garbage_file_loads_as_defaults() {
        let store = MemoryDataStore::new().with_file(SETTINGS_FILE, "\u{0}\u{1}not ini at all");
        assert!(!hide_on_startup(&store));
    }

    #[test]
    fn write_failure_surfaces_io_error() {
        let store = MemoryDataStore::new().failing_writes();

        let err = set_hide_on_startup(&store, true).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::PermissionDenied);
        assert!(!err.is_fatal_to_startup());
    }
}
