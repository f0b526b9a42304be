//! Entry point for the `noughts` binary.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use noughts_console::{Cli, ConsoleInput, ConsolePresenter, GameConfig};
use noughts_core::{Board, Session, TurnOrder};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_file)?;

    info!("Starting noughts");
    let config = GameConfig::resolve(&cli)?;

    let symbols = config.to_symbols();
    let turns = TurnOrder::new(symbols.player_count())
        .context("a game needs at least two players")?;
    let board = Board::new(*config.size());

    let presenter = ConsolePresenter::new(std::io::stdout(), symbols.clone());
    let source = ConsoleInput::new(std::io::stdin().lock(), std::io::stdout(), symbols);

    let outcome = Session::new(board, turns, presenter, source).run()?;
    info!(%outcome, "Game finished");
    Ok(())
}

/// Sets up logging to a file so the board output stays readable.
fn init_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    // Don't panic if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
