//! Game controller: move history, time travel and history ordering.
//!
//! The controller is the single owner of game state. Everything shown on
//! screen (board, turn, status, move list) is derived from the history and
//! the current move pointer on demand.

use super::error::{HistoryError, MoveError};
use super::rules;
use super::{Board, Phase, Player, Position, Status};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Display order of the move list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl SortOrder {
    /// Returns the selector label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "昇順",
            Self::Descending => "降順",
        }
    }

    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// How a move-list entry is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EntryKind {
    /// Activatable: selecting it jumps to the move.
    Button,
    /// Plain text marking the move currently shown.
    Text,
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveEntry {
    /// Move number this entry jumps to. Never renumbered by sorting.
    pub number: usize,
    /// Text shown for the entry.
    pub label: String,
    /// Whether the entry can be activated.
    pub kind: EntryKind,
}

impl MoveEntry {
    #[instrument]
    fn new(number: usize, current_move: usize) -> Self {
        let (label, kind) = if number == current_move {
            (format!("You are at move #{number}"), EntryKind::Text)
        } else if number > 0 {
            (format!("Go to move #{number}"), EntryKind::Button)
        } else {
            ("Go to game start".to_string(), EntryKind::Button)
        };
        Self {
            number,
            label,
            kind,
        }
    }

    /// List ordinal shown beside the entry.
    ///
    /// Numbering follows the move, so a descending list counts down.
    pub fn ordinal(&self) -> usize {
        self.number + 1
    }

    /// Returns true if selecting this entry does something.
    pub fn is_button(&self) -> bool {
        self.kind == EntryKind::Button
    }
}

/// Tic-tac-toe game with a time-travelling move history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    history: Vec<Board>,
    current_move: usize,
    sort_order: SortOrder,
}

impl Game {
    /// Creates a new game with an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::with_sort_order(SortOrder::default())
    }

    /// Creates a new game whose move list starts in `sort_order`.
    #[instrument]
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
            sort_order,
        }
    }

    /// Every board produced so far, starting with the empty board.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the displayed board.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Current move-list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// The displayed board.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Player who moves next on the displayed board.
    pub fn next_player(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// Phase of the displayed board.
    pub fn phase(&self) -> Phase {
        rules::phase(self.current_board())
    }

    /// Status line for the displayed board.
    pub fn status(&self) -> Status {
        rules::status(self.current_board(), self.next_player())
    }

    /// Records `board` as the move after the displayed one.
    ///
    /// Boards after the current move are discarded first, so playing from
    /// an earlier point overwrites the old future.
    #[instrument(skip(self, board), fields(current_move = self.current_move))]
    pub fn submit_move(&mut self, board: Board) {
        let discarded = self.history.len() - (self.current_move + 1);
        self.history.truncate(self.current_move + 1);
        self.history.push(board);
        self.current_move = self.history.len() - 1;
        info!(
            current_move = self.current_move,
            discarded, "Move recorded"
        );
    }

    /// Validates a selection on the displayed board and records it.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn play(&mut self, pos: Position) -> Result<(), MoveError> {
        let board = rules::attempt_move(self.current_board(), pos, self.next_player())?;
        self.submit_move(board);
        Ok(())
    }

    /// Shows the board after `move_number` moves without touching history.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, move_number: usize) -> Result<(), HistoryError> {
        if move_number >= self.history.len() {
            return Err(HistoryError::OutOfRange {
                requested: move_number,
                len: self.history.len(),
            });
        }
        debug!(from = self.current_move, "Jumping through history");
        self.current_move = move_number;
        Ok(())
    }

    /// Flips the move-list order.
    #[instrument(skip(self))]
    pub fn toggle_sort(&mut self) {
        self.sort_order = self.sort_order.toggle();
        debug!(sort_order = ?self.sort_order, "Toggled sort order");
    }

    /// Selects a move-list order.
    #[instrument(skip(self))]
    pub fn set_sort_order(&mut self, sort_order: SortOrder) {
        self.sort_order = sort_order;
    }

    /// Move-list entries in display order.
    pub fn moves(&self) -> Vec<MoveEntry> {
        let entries = (0..self.history.len()).map(|n| MoveEntry::new(n, self.current_move));
        match self.sort_order {
            SortOrder::Ascending => entries.collect(),
            SortOrder::Descending => entries.rev().collect(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.current_move(), 0);
        assert_eq!(game.next_player(), Player::X);
        assert_eq!(game.status().to_string(), "Next player: X");
    }

    #[test]
    fn test_rejected_play_keeps_history() {
        let mut game = Game::new();
        game.play(Position::Center).unwrap();
        let before = game.clone();

        assert!(game.play(Position::Center).is_err());
        assert_eq!(game, before);
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut game = Game::new();
        assert_eq!(
            game.jump_to(1),
            Err(HistoryError::OutOfRange {
                requested: 1,
                len: 1
            })
        );
        assert_eq!(game.current_move(), 0);
    }

    #[test]
    fn test_single_entry_labels() {
        let game = Game::new();
        let moves = game.moves();
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].label, "You are at move #0");
        assert_eq!(moves[0].kind, EntryKind::Text);
    }

    #[test]
    fn test_sort_labels() {
        assert_eq!(SortOrder::Ascending.label(), "昇順");
        assert_eq!(SortOrder::Descending.label(), "降順");
        assert_eq!(SortOrder::Ascending.toggle(), SortOrder::Descending);
    }
}
