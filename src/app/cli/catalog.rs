//! Catalog-facing commands: welcome, init, list.

use clap::ValueEnum;

use crate::app::api::{
    self, CatalogSummary, InitOutcome, SessionOptions, WelcomeOutcome,
};
use crate::domain::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    Text,
    Json,
}

pub fn run_welcome(session: &SessionOptions, force: bool) -> Result<(), AppError> {
    match api::welcome(session, force)? {
        WelcomeOutcome::Hidden => {
            tracing::info!("Welcome screen hidden by 'hide_on_startup'");
        }
        WelcomeOutcome::Shown(summary) => print_welcome(&summary),
    }
    Ok(())
}

fn print_welcome(summary: &CatalogSummary) {
    let title = if summary.app_name.is_empty() { "Welcome" } else { summary.app_name.as_str() };
    println!("{}", title);
    if !summary.subtitle.is_empty() {
        println!("{}", summary.subtitle);
    }
    let version = if summary.app_version.is_empty() { "N/A" } else { summary.app_version.as_str() };
    println!("Version {}", version);
    println!();
    println!("Build an installation script tailored to your development environment.");
    println!();
    println!("How to use:");
    println!("  1. Browse the catalog:            dev-setup list");
    println!("  2. Pick tools interactively:      dev-setup select -o install-dev-env.sh");
    println!("     or by id / category:           dev-setup generate vim -c Languages");
    println!("  3. Review, then run it:           sudo -E ./install-dev-env.sh");
    println!();
    println!("Notes:");
    println!("  - Always review the generated script before execution");
    println!("  - Some tools install to your user account, not system-wide");
    println!("  - The catalog updates from the remote source on each launch");
    println!();
    let options: usize = summary.categories.iter().map(|c| c.options.len()).sum();
    println!("{} categories, {} options available.", summary.categories.len(), options);
    println!("Hide this screen with: dev-setup settings hide-on-startup true");
}

pub fn run_init(session: &SessionOptions) -> Result<(), AppError> {
    match api::init(session)? {
        InitOutcome::Created(path) => {
            println!("✅ Installed starter catalog at {}", path.display());
        }
        InitOutcome::AlreadyPresent(path) => {
            println!("✅ Catalog already present at {} (left unchanged)", path.display());
        }
    }
    Ok(())
}

pub fn run_list(session: &SessionOptions, format: ListFormat) -> Result<(), AppError> {
    let summary = api::list(session)?;

    match format {
        ListFormat::Json => {
            let json = serde_json::to_string_pretty(&summary).map_err(|e| {
                AppError::Io(std::io::Error::other(format!("Failed to serialize catalog: {}", e)))
            })?;
            println!("{}", json);
        }
        ListFormat::Text => {
            println!("{} {}", summary.app_name, summary.app_version);
            for category in &summary.categories {
                println!();
                if category.description.is_empty() {
                    println!("{}", category.name);
                } else {
                    println!("{} - {}", category.name, category.description);
                }
                for option in &category.options {
                    println!("  • {:<16} {}", option.id, option.label);
                }
            }
        }
    }
    Ok(())
}
