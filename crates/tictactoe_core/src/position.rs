//! Board coordinates.

use crate::action::MoveError;
use crate::types::Board;
use std::fmt;
use tracing::instrument;

/// A validated (row, column) pair on the board, zero-based.
///
/// Values outside `0..3` cannot be constructed, so indexing a [`Board`]
/// with a `Position` never panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// The middle cell.
    pub const CENTER: Position = Position { row: 1, col: 1 };

    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position { row: 0, col: 0 },
        Position { row: 0, col: 1 },
        Position { row: 0, col: 2 },
        Position { row: 1, col: 0 },
        Position { row: 1, col: 1 },
        Position { row: 1, col: 2 },
        Position { row: 2, col: 0 },
        Position { row: 2, col: 1 },
        Position { row: 2, col: 2 },
    ];

    /// Creates a position from zero-based coordinates.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < 3 && col < 3).then_some(Self { row, col })
    }

    /// Creates a position from the 1-based coordinates a player types.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] unless both values are in `1..=3`.
    #[instrument]
    pub fn from_one_based(row: i64, col: i64) -> Result<Self, MoveError> {
        let in_range = |v: i64| (1..=3).contains(&v);
        if !in_range(row) || !in_range(col) {
            return Err(MoveError::OutOfRange { row, col });
        }
        // Both values are in 1..=3, so the casts cannot truncate.
        Ok(Self {
            row: (row - 1) as usize,
            col: (col - 1) as usize,
        })
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.row
    }

    /// Zero-based column.
    pub fn col(self) -> usize {
        self.col
    }

    /// Returns every empty position on `board`.
    #[instrument(skip(board))]
    pub fn open_cells(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

/// Displays as the 1-based coordinates shown to players.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}, column {}", self.row + 1, self.col + 1)
    }
}
