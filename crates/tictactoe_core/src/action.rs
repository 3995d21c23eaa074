//! Moves and the errors that reject them.

use crate::position::Position;
use crate::types::Mark;
use std::fmt;

/// A mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position)
    }
}

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Coordinates fall outside the 1-3 range.
    #[display("Position ({row}, {col}) is outside the board")]
    OutOfRange {
        /// Requested row, 1-based.
        row: i64,
        /// Requested column, 1-based.
        col: i64,
    },

    /// The target cell already holds a mark.
    #[display("Square at {position} is already occupied")]
    Occupied {
        /// The occupied cell.
        position: Position,
    },

    /// The game has already finished.
    #[display("Game is already over")]
    GameOver,
}
