//! Settings commands.

use clap::Subcommand;

use crate::app::api::{self, SessionOptions};
use crate::domain::AppError;
use crate::domain::settings::parse_bool;

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Print current preferences
    Show,
    /// Hide the welcome screen on startup (true/false)
    HideOnStartup {
        /// true/false, yes/no, on/off, 1/0
        value: String,
    },
}

pub fn run_settings(session: &SessionOptions, command: SettingsCommands) -> Result<(), AppError> {
    match command {
        SettingsCommands::Show => {
            let view = api::settings_show(session)?;
            println!("Settings file: {}", view.path.display());
            println!("hide_on_startup = {}", view.hide_on_startup);
            Ok(())
        }
        SettingsCommands::HideOnStartup { value } => {
            let value = parse_bool(&value)?;
            match api::settings_set_hide_on_startup(session, value) {
                Ok(view) => {
                    if view.hide_on_startup {
                        println!("✅ The welcome screen will be hidden on next launch.");
                        println!(
                            "   Run 'dev-setup settings hide-on-startup false' or delete {} to show it again.",
                            view.path.display()
                        );
                    } else {
                        println!("✅ The welcome screen will show on next launch.");
                    }
                }
                Err(err @ AppError::Io(_)) => {
                    eprintln!("⚠️  Could not save user settings: {}", err);
                }
                Err(err) => return Err(err),
            }
            Ok(())
        }
    }
}
