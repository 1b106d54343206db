//! Rewind Tic-Tac-Toe - terminal tic-tac-toe with time travel.
//!
//! Every move is kept as an immutable board snapshot. Any earlier board can
//! be revisited, and playing from there discards the moves that followed.
//!
//! # Architecture
//!
//! - **Rules**: pure win detection and move validation over one board
//! - **Game**: the controller owning history, current move and list order
//! - **TUI**: ratatui front end reporting cell and history selections upward
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{Game, Position};
//!
//! let mut game = Game::new();
//! game.play(Position::Center)?;
//! game.play(Position::TopLeft)?;
//! game.jump_to(1)?;
//! game.play(Position::BottomRight)?;
//! assert_eq!(game.history().len(), 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod games;
mod replay;
mod tui;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, Settings};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::rules::{LINES, attempt_move, check_winner, phase, status};
pub use games::tictactoe::{
    Board, EntryKind, Game, HistoryError, MoveEntry, MoveError, ParsePositionError, Phase, Player,
    Position, SortOrder, Square, Status,
};

// Crate-level exports - Headless replay
pub use replay::{ReplayError, render_replay};

// Crate-level exports - Terminal UI
pub use tui::{App, Focus, Hitboxes, Message, run_tui};
