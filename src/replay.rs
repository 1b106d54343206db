//! Headless replay of a fixed move sequence.

use derive_more::{Display, Error, From};
use serde::Serialize;
use tracing::{info, instrument};

use crate::{Board, Game, MoveEntry, MoveError, Position};

/// Error from replaying a move sequence.
#[derive(Debug, Display, Error, From)]
pub enum ReplayError {
    /// A move was rejected by the board.
    #[display("Move {step} ({position}) rejected: {source}")]
    #[from(skip)]
    InvalidMove {
        /// One-based index of the rejected move.
        step: usize,
        /// Position that was selected.
        position: Position,
        /// Why the board rejected it.
        source: MoveError,
    },

    /// The result could not be serialized.
    #[display("Failed to serialize replay: {_0}")]
    Json(serde_json::Error),
}

#[derive(Serialize)]
struct Snapshot<'a> {
    status: String,
    current_move: usize,
    history: &'a [Board],
    moves: Vec<MoveEntry>,
}

/// Plays `moves` from an empty board and renders the final screen as text.
///
/// With `json` the whole history is rendered as JSON instead.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn render_replay(moves: &[Position], json: bool) -> Result<String, ReplayError> {
    let mut game = Game::new();
    for (i, &position) in moves.iter().enumerate() {
        game.play(position).map_err(|source| ReplayError::InvalidMove {
            step: i + 1,
            position,
            source,
        })?;
    }
    info!(status = %game.status(), "Replay finished");

    if json {
        let snapshot = Snapshot {
            status: game.status().to_string(),
            current_move: game.current_move(),
            history: game.history(),
            moves: game.moves(),
        };
        return Ok(serde_json::to_string_pretty(&snapshot)?);
    }

    let listing = game
        .moves()
        .iter()
        .map(|entry| format!("{:>2}. {}\n", entry.ordinal(), entry.label))
        .collect::<String>();
    Ok(format!(
        "{}\n\n{}\n\n{listing}",
        game.current_board(),
        game.status()
    ))
}
