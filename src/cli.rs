//! Command-line interface for rewind_tictactoe.

use crate::Position;
use clap::{Parser, Subcommand};

/// Rewind Tic-Tac-Toe - terminal tic-tac-toe with move history
#[derive(Parser, Debug)]
#[command(name = "rewind_tictactoe")]
#[command(about = "Tic-tac-toe with time travel through the move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Write logs here instead of the configured file
        #[arg(long)]
        log_file: Option<std::path::PathBuf>,
    },

    /// Play a fixed sequence of moves and print the result
    Replay {
        /// Board positions in play order: 0-8 or labels such as "center"
        #[arg(required = true)]
        moves: Vec<Position>,

        /// Print the full history as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// The command to run, `play` when none was given.
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Play { log_file: None })
    }
}
