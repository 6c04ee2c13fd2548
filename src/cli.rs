//! Command-line interface for hash_chess.

use clap::Parser;
use std::path::PathBuf;

/// Console #-shaped chess against an exhaustive-search opponent.
#[derive(Parser, Debug)]
#[command(name = "hash_chess")]
#[command(about = "Play #-shaped chess against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// File revealed when the human completes a line
    #[arg(long, default_value = "flag.txt")]
    pub secret_file: PathBuf,

    /// Plain output: no colors, no screen clearing
    #[arg(long)]
    pub plain: bool,
}
