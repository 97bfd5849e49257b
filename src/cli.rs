//! Command line definition.
//!
//! Lives in the library so `xtask` can render the man page from it.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::sort::Algorithm;

#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("SORTVIS_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("SORTVIS_BUILD_DATE"), ")");

#[derive(Debug, Parser)]
#[command(
    name = "sortvis",
    version = VERSION,
    about = "Watch selection, bubble and insertion sort race side by side",
    long_about = None
)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file (the TUI never logs to the terminal)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Animate the three sorts side by side (default)
    Run(RunArgs),

    /// Print every step each algorithm takes, without animation
    Trace(TraceArgs),

    /// Inspect or edit the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct RunArgs {
    /// Length of generated arrays
    #[arg(long, value_name = "N")]
    pub size: Option<usize>,

    /// Step delay (settle duration) in milliseconds
    #[arg(long, value_name = "MS")]
    pub speed: Option<u64>,

    /// Start with this comma separated array instead of a random one
    #[arg(long, value_name = "LIST")]
    pub array: Option<String>,

    /// Seed for reproducible random arrays
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start sorting immediately
    #[arg(long)]
    pub start: bool,
}

#[derive(Debug, Clone, Args)]
pub struct TraceArgs {
    /// Algorithm to trace
    #[arg(long, value_enum, default_value_t = AlgorithmChoice::All)]
    pub algorithm: AlgorithmChoice,

    /// Comma separated array to sort
    #[arg(long, value_name = "LIST")]
    pub array: Option<String>,

    /// Length of the random array when --array is not given
    #[arg(long, value_name = "N")]
    pub size: Option<usize>,

    /// Seed for reproducible random arrays
    #[arg(long)]
    pub seed: Option<u64>,

    /// Smallest accepted value
    #[arg(long, value_name = "V")]
    pub min: Option<u32>,

    /// Largest accepted value
    #[arg(long, value_name = "V")]
    pub max: Option<u32>,

    /// Request a stop after this many steps per algorithm
    #[arg(long, value_name = "N")]
    pub stop_after: Option<usize>,

    /// Print one JSON object per line
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmChoice {
    Selection,
    Bubble,
    Insertion,
    All,
}

impl AlgorithmChoice {
    pub fn algorithms(&self) -> Vec<Algorithm> {
        match self {
            AlgorithmChoice::Selection => vec![Algorithm::Selection],
            AlgorithmChoice::Bubble => vec![Algorithm::Bubble],
            AlgorithmChoice::Insertion => vec![Algorithm::Insertion],
            AlgorithmChoice::All => Algorithm::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
    /// Open the config file in $EDITOR
    Edit,
    /// Add settings missing from the config file
    Migrate {
        /// Apply without asking
        #[arg(long, short)]
        yes: bool,
    },
}
