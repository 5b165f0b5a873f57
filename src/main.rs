mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use daynote::config::DaynoteConfig;

#[derive(Parser)]
#[command(name = "daynote", version, about = "One note per day, persisted locally")]
struct Cli {
    /// Path to a config file (defaults to ~/.daynote/config.toml)
    #[arg(long, global = true)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show today's note, assigning it on first access
    Today,
    /// Show the last 7 days of notes, backfilling missed days
    History {
        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Manage the daily reminder
    Remind {
        #[command(subcommand)]
        action: RemindAction,
    },
}

#[derive(Subcommand)]
enum RemindAction {
    /// Record the notification grant and install the daily trigger
    Enable {
        /// Local fire hour (0-23), defaults to the configured hour
        #[arg(long)]
        hour: Option<u32>,
        /// Local fire minute (0-59), defaults to the configured minute
        #[arg(long)]
        minute: Option<u32>,
    },
    /// Revoke the grant and remove any pending trigger
    Disable,
    /// Show the grant state and the pending trigger
    Status,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => DaynoteConfig::load_from(path)?,
        None => DaynoteConfig::load()?,
    };

    // Initialize tracing with the configured log level, on stderr so
    // stdout stays clean for note output.
    let filter = EnvFilter::try_new(&config.app.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Today => cli::today::run(&config),
        Command::History { json } => cli::history::run(&config, json),
        Command::Remind { action } => match action {
            RemindAction::Enable { hour, minute } => cli::remind::enable(&config, hour, minute),
            RemindAction::Disable => cli::remind::disable(&config),
            RemindAction::Status => cli::remind::status(&config),
        },
    }
}
