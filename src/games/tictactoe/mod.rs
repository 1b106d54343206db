mod error;
mod game;
mod phases;
mod position;
pub mod rules;
mod types;

pub use error::{HistoryError, MoveError};
pub use game::{EntryKind, Game, MoveEntry, SortOrder};
pub use phases::{Phase, Status};
pub use position::{ParsePositionError, Position};
pub use types::{Board, Player, Square};
