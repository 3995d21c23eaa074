//! Draw detection for tic-tac-toe.

use super::win::winner;
use crate::{Board, Cell};
use tracing::instrument;

/// Checks if every cell is occupied.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().all(|c| c != Cell::Empty)
}

/// A full board where neither mark holds a line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}
