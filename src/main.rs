//! Binary entry point: parse the CLI and run the terminal UI.

use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use tictactoe_duel::{cli::Cli, tui};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tui::run(
        !cli.two_player,
        Duration::from_millis(cli.delay_ms),
        &cli.log_file,
    )
    .await
}
