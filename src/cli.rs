//! Command-line argument parsing for the scenario simulator
//!
//! Supports:
//! - Replaying a YAML or JSON scenario file
//! - Text or JSON-lines output
//! - Overriding the config file and theme

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Replays editor selection scenarios through the floating toolbar
#[derive(Parser, Debug)]
#[command(
    name = "floatbar-sim",
    version,
    about = "Replay selection scenarios through the floating toolbar"
)]
pub struct CliArgs {
    /// Scenario file (.yaml, .yml or .json)
    #[arg(value_name = "SCENARIO")]
    pub scenario: PathBuf,

    /// Output format for committed states
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Config file to use instead of the user config
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Theme id, overriding the config
    #[arg(long, value_name = "ID")]
    pub theme: Option<String>,

    /// Print the overlay's CSS with each committed state
    #[arg(long)]
    pub css: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per commit
    Text,
    /// One JSON object per commit
    Json,
}
