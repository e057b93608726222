//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe in the terminal, with score tracking and an optional
/// random computer opponent.
#[derive(Parser, Debug)]
#[command(name = "tictactoe_duel")]
#[command(about = "Two-player tic-tac-toe with a random computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Start in two-player mode instead of playing against the computer
    #[arg(long)]
    pub two_player: bool,

    /// Delay in milliseconds before the computer moves
    #[arg(long, default_value = "500")]
    pub delay_ms: u64,

    /// Log file path (tracing output goes here, not the terminal)
    #[arg(long, default_value = "tictactoe_duel.log")]
    pub log_file: PathBuf,
}
