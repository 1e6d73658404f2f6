//! CLI Adapter.

mod catalog;
mod generate;
mod settings;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::app::api::SessionOptions;
use crate::domain::{AppError, DEFAULT_SCRIPT_FILE_NAME};

#[derive(Parser)]
#[command(name = "dev-setup")]
#[command(version)]
#[command(
    about = "Pick developer tools from a catalog and generate one installer script",
    long_about = None
)]
struct Cli {
    /// Data directory holding config.yaml, user_settings.ini and app.toml
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,
    /// Do not contact the remote catalog; use the local cache only
    #[arg(long, global = true)]
    offline: bool,
    /// Show informational diagnostics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the welcome screen (default when no command is given)
    #[clap(visible_alias = "w")]
    Welcome {
        /// Show even if hidden on startup
        #[arg(short, long)]
        force: bool,
    },
    /// Install the bundled starter catalog if no catalog cache exists
    #[clap(visible_alias = "i")]
    Init,
    /// List categories and options
    #[clap(visible_alias = "ls")]
    List {
        /// Output format
        #[arg(long, value_enum, default_value_t = catalog::ListFormat::Text)]
        format: catalog::ListFormat,
    },
    /// Generate an installer script from option ids and categories
    #[clap(visible_alias = "g")]
    Generate {
        /// Option ids to include
        ids: Vec<String>,
        /// Include every option of a category (repeatable)
        #[arg(short, long = "category", value_name = "NAME")]
        categories: Vec<String>,
        /// Save the script here (made executable) instead of printing it
        #[arg(
            short,
            long,
            value_name = "PATH",
            num_args = 0..=1,
            default_missing_value = DEFAULT_SCRIPT_FILE_NAME
        )]
        output: Option<PathBuf>,
    },
    /// Choose options interactively, category by category, then generate
    #[clap(visible_alias = "s")]
    Select {
        /// Option ids to start checked
        ids: Vec<String>,
        /// Save the script here (made executable) instead of printing it
        #[arg(
            short,
            long,
            value_name = "PATH",
            num_args = 0..=1,
            default_missing_value = DEFAULT_SCRIPT_FILE_NAME
        )]
        output: Option<PathBuf>,
    },
    /// Show or change persisted preferences
    Settings {
        #[command(subcommand)]
        command: settings::SettingsCommands,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let session = SessionOptions { data_dir: cli.data_dir, offline: cli.offline };

    let command = cli.command.unwrap_or(Commands::Welcome { force: false });
    let result: Result<i32, AppError> = match command {
        Commands::Welcome { force } => catalog::run_welcome(&session, force).map(|_| 0),
        Commands::Init => catalog::run_init(&session).map(|_| 0),
        Commands::List { format } => catalog::run_list(&session, format).map(|_| 0),
        Commands::Generate { ids, categories, output } => {
            generate::run_generate(&session, ids, categories, output)
        }
        Commands::Select { ids, output } => generate::run_select(&session, ids, output),
        Commands::Settings { command } => settings::run_settings(&session, command).map(|_| 0),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if matches!(e, AppError::ConfigMissing(_)) {
                eprintln!("Run 'dev-setup init' to install the starter catalog.");
            }
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
