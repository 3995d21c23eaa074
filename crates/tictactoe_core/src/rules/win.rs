//! Win detection for tic-tac-toe.

use crate::{Board, Cell, Mark, Position};
use strum::IntoEnumIterator;
use tracing::instrument;

const fn at(row: usize, col: usize) -> Position {
    Position::ALL[row * 3 + col]
}

/// The eight winning lines: three rows, three columns, two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [at(0, 0), at(0, 1), at(0, 2)],
    [at(1, 0), at(1, 1), at(1, 2)],
    [at(2, 0), at(2, 1), at(2, 2)],
    // Columns
    [at(0, 0), at(1, 0), at(2, 0)],
    [at(0, 1), at(1, 1), at(2, 1)],
    [at(0, 2), at(1, 2), at(2, 2)],
    // Diagonals
    [at(0, 0), at(1, 1), at(2, 2)],
    [at(0, 2), at(1, 1), at(2, 0)],
];

/// Checks whether `mark` fills any winning line.
#[instrument(skip(board))]
pub fn check_winner(board: &Board, mark: Mark) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.get(*pos) == Cell::Occupied(mark)))
}

/// Returns the mark holding a complete line, if any.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Mark> {
    Mark::iter().find(|mark| check_winner(board, *mark))
}
