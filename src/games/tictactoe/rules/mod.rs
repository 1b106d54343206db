//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. They never touch the move
//! history; the controller decides what to do with the boards they return.

pub mod win;

pub use win::{LINES, check_winner};

use super::{Board, MoveError, Phase, Player, Position, Status};
use tracing::{debug, instrument};

/// Places `next` at `pos` if the board accepts it.
///
/// Rejected when the square is occupied or the board already has a
/// winner. On acceptance the returned board differs from `board` in
/// exactly one square.
#[instrument]
pub fn attempt_move(board: &Board, pos: Position, next: Player) -> Result<Board, MoveError> {
    if !board.is_empty(pos) {
        debug!("Rejected: square occupied");
        return Err(MoveError::SquareOccupied(pos));
    }
    if let Some(winner) = check_winner(board) {
        debug!(%winner, "Rejected: game already decided");
        return Err(MoveError::GameOver(winner));
    }
    Ok(board.with_mark(pos, next))
}

/// Phase of a board.
pub fn phase(board: &Board) -> Phase {
    match check_winner(board) {
        Some(player) => Phase::Won(player),
        None => Phase::InProgress,
    }
}

/// Status line for a board with `next` to move.
pub fn status(board: &Board, next: Player) -> Status {
    match phase(board) {
        Phase::Won(player) => Status::Winner(player),
        Phase::InProgress => Status::NextPlayer(next),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Square;

    #[test]
    fn test_accepts_empty_square() {
        let board = Board::new().with_mark(Position::Center, Player::X);
        let next = attempt_move(&board, Position::TopLeft, Player::O).unwrap();

        let changed: Vec<Position> = Position::ALL
            .into_iter()
            .filter(|&p| board.get(p) != next.get(p))
            .collect();
        assert_eq!(changed, vec![Position::TopLeft]);
        assert_eq!(next.get(Position::TopLeft), Square::Occupied(Player::O));
    }

    #[test]
    fn test_rejects_occupied_square() {
        let board = Board::new().with_mark(Position::Center, Player::X);
        assert_eq!(
            attempt_move(&board, Position::Center, Player::O),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_rejects_after_win() {
        let board = [Position::TopLeft, Position::TopCenter, Position::TopRight]
            .into_iter()
            .fold(Board::new(), |b, p| b.with_mark(p, Player::X));
        assert_eq!(
            attempt_move(&board, Position::Center, Player::O),
            Err(MoveError::GameOver(Player::X))
        );
    }

    #[test]
    fn test_status_prefers_winner() {
        let board = [Position::TopLeft, Position::Center, Position::BottomRight]
            .into_iter()
            .fold(Board::new(), |b, p| b.with_mark(p, Player::O));
        assert_eq!(status(&board, Player::X), Status::Winner(Player::O));
        assert_eq!(status(&Board::new(), Player::X), Status::NextPlayer(Player::X));
    }
}
