//! Rejections raised by move validation and history navigation.

use super::{Player, Position};

/// Reason a selected square cannot take the next mark.
///
/// The interactive board swallows these silently; they surface only to
/// callers that ask for strict play, such as `replay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(#[error(not(source))] Position),

    /// The board already has a winner.
    #[display("Game is already over: {_0} has won")]
    GameOver(#[error(not(source))] Player),
}

/// Error from navigating the move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum HistoryError {
    /// The requested move is not in the history.
    #[display("Move #{requested} does not exist (history holds {len} boards)")]
    OutOfRange {
        /// Requested move number.
        requested: usize,
        /// Number of boards in the history.
        len: usize,
    },
}
