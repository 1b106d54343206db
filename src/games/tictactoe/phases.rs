//! Derived game phase and status line.
//!
//! Neither is ever stored. Both are recomputed from the displayed board and
//! the current move number whenever they are needed.

use super::Player;
use serde::{Deserialize, Serialize};

/// Conceptual phase of the displayed board.
///
/// No draw phase exists. A full board without a winner stays `InProgress`
/// and rejects every selection because all squares are occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Moves may still be made.
    InProgress,
    /// A player completed a line.
    Won(Player),
}

/// Status line shown above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// The displayed board has a winner.
    #[display("Winner: {_0}")]
    Winner(Player),
    /// Nobody has won yet.
    #[display("Next player: {_0}")]
    NextPlayer(Player),
}
