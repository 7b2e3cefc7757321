//! Command-line interface for rewind.

use clap::Parser;
use std::path::PathBuf;

/// Rewind - tic-tac-toe with time travel, in your terminal
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with clickable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it doesn't exist)
    #[arg(short, long, default_value = "rewind.toml")]
    pub config: PathBuf,

    /// Redraw interval while animating, in milliseconds
    #[arg(long)]
    pub tick_rate_ms: Option<u64>,

    /// Disable move and win animations
    #[arg(long)]
    pub no_animation: bool,

    /// File that receives tracing output
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
