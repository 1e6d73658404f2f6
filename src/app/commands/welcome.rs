//! Startup screen.

use crate::app::commands::list::{self, CatalogSummary};
use crate::app::commands::settings;
use crate::domain::Catalog;
use crate::ports::DataStore;

/// What the startup screen should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WelcomeOutcome {
    /// The user opted out of the startup screen.
    Hidden,
    /// Show the catalog overview.
    Shown(CatalogSummary),
}

/// Decide whether to show the welcome screen. `force` ignores the preference.
pub fn execute(store: &impl DataStore, catalog: &Catalog, force: bool) -> WelcomeOutcome {
    if !force && settings::hide_on_startup(store) {
        return WelcomeOutcome::Hidden;
    }
    WelcomeOutcome::Shown(list::execute(catalog))
}
