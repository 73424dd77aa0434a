//! MultiClip - CLI entry point

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use multiclip::commands;
use multiclip::config;
use multiclip::daemon;

#[derive(Debug, Parser)]
#[command(
    name = "multiclip",
    version,
    about = "Multi-slot clipboard via global hotkeys"
)]
struct Cli {
    /// Snapshot file to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the background daemon with global store/recall hotkeys
    Daemon,
    /// List stored clipboard slots
    List,
    /// Clear a slot
    Clear {
        /// Slot key (A-Z or 0-9)
        #[arg(value_name = "SLOT")]
        slot: char,
    },
    /// Export the snapshot to a JSON file
    Export {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
    /// Import a snapshot from a JSON file
    Import {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    // The settings file is created on the first daemon run; one-shot
    // commands only read whatever configuration exists
    let mut settings = match cli.command {
        Commands::Daemon => config::init_settings(),
        _ => config::Settings::load(),
    };
    if let Some(path) = cli.data_file {
        settings.data_file = path;
    }

    let result: Result<(), Box<dyn std::error::Error>> = match cli.command {
        Commands::Daemon => {
            log::info!("MultiClip starting...");
            daemon::run(settings).map_err(|e| e.into())
        }
        Commands::List => commands::run_list(&settings.data_file),
        Commands::Clear { slot } => commands::run_clear(&settings.data_file, slot),
        Commands::Export { path } => commands::run_export(&settings.data_file, &path),
        Commands::Import { path } => commands::run_import(&settings.data_file, &path),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
