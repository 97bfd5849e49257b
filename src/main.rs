//! sortvis command line entry point

mod commands;

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sortvis::cli::{Cli, Commands, ConfigCommands, RunArgs};
use sortvis::Config;

/// Environment variable holding the log filter directives.
const LOG_ENV: &str = "SORTVIS_LOG";

/// Install the tracing subscriber.
///
/// Logs go to `log_file` when given. Without one, the TUI logs nowhere so
/// nothing is written over the drawn screen; other commands log to stderr.
fn init_logging(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if interactive => {}
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Run(RunArgs::default()));

    init_logging(cli.log_file.as_deref(), matches!(command, Commands::Run(_)))?;
    let config_path = Config::resolve_path(cli.config.as_deref())?;

    match command {
        Commands::Run(args) => commands::run::handle_run(&args, &config_path),
        Commands::Trace(args) => commands::trace::handle_trace(&args, &config_path),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(&config_path),
            ConfigCommands::Path => commands::config::handle_path(&config_path),
            ConfigCommands::Edit => commands::config::handle_edit(&config_path),
            ConfigCommands::Migrate { yes } => commands::config::handle_migrate(&config_path, yes),
        },
        Commands::Completions { shell } => commands::completions::handle_completions(shell),
    }
}
