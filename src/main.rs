//! Rewind Tic-Tac-Toe - command-line entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use rewind_tictactoe::{Cli, Command, Settings, render_replay, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;

    match cli.command() {
        Command::Play { log_file } => {
            let settings = match log_file {
                Some(path) => settings.with_log_file(path),
                None => settings,
            };
            run_tui(&settings)
        }
        Command::Replay { moves, json } => run_replay(&settings, &moves, json),
    }
}

/// Replays moves headlessly, logging to stderr.
#[instrument(skip_all, fields(moves = moves.len()))]
fn run_replay(
    settings: &Settings,
    moves: &[rewind_tictactoe::Position],
    json: bool,
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Replaying moves");
    let output = render_replay(moves, json)?;
    println!("{}", output);
    Ok(())
}
