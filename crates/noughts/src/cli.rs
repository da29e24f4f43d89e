//! Command-line interface for noughts.

use clap::Parser;
use std::path::PathBuf;

/// Noughts - play tic-tac-toe against a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play tic-tac-toe against a perfect computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML game config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Milliseconds the computer pauses before moving (overrides config)
    #[arg(long)]
    pub think_ms: Option<u64>,
}
