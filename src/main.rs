//! Console entry point for #-shaped chess.

mod cli;

use anyhow::Result;
use clap::Parser;
use hash_chess::{Console, ConsoleSettings, GameController};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so they never corrupt the rendered board.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();
    info!(secret_file = %cli.secret_file.display(), "starting session");

    let settings = ConsoleSettings::new(cli.secret_file, cli.plain);
    let mut console = Console::new(settings);
    console.banner()?;

    let mut controller = GameController::new();
    let outcome = controller.play(&mut console)?;
    console.farewell(outcome);

    Ok(())
}
