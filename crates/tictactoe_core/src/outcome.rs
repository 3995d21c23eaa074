//! Turn order and game results.

use crate::rules::{check_winner, is_draw};
use crate::{Board, Mark};
use tracing::instrument;

/// Whose move is next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Turn {
    /// The person at the console.
    Human,
    /// The random-move opponent.
    Computer,
}

impl Turn {
    /// X always moves first.
    pub fn first(human: Mark) -> Self {
        match human {
            Mark::X => Turn::Human,
            Mark::O => Turn::Computer,
        }
    }

    /// The other side.
    pub fn flip(self) -> Self {
        match self {
            Turn::Human => Turn::Computer,
            Turn::Computer => Turn::Human,
        }
    }
}

/// Result of the game, recomputed from the board after every move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    /// No winner yet and empty cells remain.
    InProgress,
    /// The human completed a line.
    HumanWin,
    /// The computer completed a line.
    ComputerWin,
    /// Board is full with no line.
    Draw,
}

impl GameResult {
    /// True for every result except [`GameResult::InProgress`].
    pub fn is_terminal(self) -> bool {
        self != GameResult::InProgress
    }

    /// Line printed when the game ends.
    pub fn announcement(self) -> Option<&'static str> {
        match self {
            GameResult::InProgress => None,
            GameResult::HumanWin => Some("You Win!"),
            GameResult::ComputerWin => Some("Computer Wins!"),
            GameResult::Draw => Some("It's a tie!"),
        }
    }
}

/// Derives the result of `board` for a human playing `human`.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, human: Mark) -> GameResult {
    if check_winner(board, human) {
        GameResult::HumanWin
    } else if check_winner(board, human.opponent()) {
        GameResult::ComputerWin
    } else if is_draw(board) {
        GameResult::Draw
    } else {
        GameResult::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    const X: Cell = Cell::Occupied(Mark::X);
    const O: Cell = Cell::Occupied(Mark::O);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_x_moves_first() {
        assert_eq!(Turn::first(Mark::X), Turn::Human);
        assert_eq!(Turn::first(Mark::O), Turn::Computer);
        assert_eq!(Turn::Human.flip(), Turn::Computer);
        assert_eq!(Turn::Computer.flip().flip(), Turn::Computer);
    }

    #[test]
    fn test_evaluate_from_human_perspective() {
        let board = Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]);
        assert_eq!(evaluate(&board, Mark::X), GameResult::HumanWin);
        assert_eq!(evaluate(&board, Mark::O), GameResult::ComputerWin);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
        let result = evaluate(&board, Mark::O);
        assert_eq!(result, GameResult::Draw);
        assert_eq!(result.announcement(), Some("It's a tie!"));
    }

    #[test]
    fn test_open_board_in_progress() {
        let board = Board::from_rows([[X, O, E], [E, E, E], [E, E, E]]);
        let result = evaluate(&board, Mark::X);
        assert_eq!(result, GameResult::InProgress);
        assert!(!result.is_terminal());
        assert_eq!(result.announcement(), None);
    }
}
