//! Turn-by-turn game state.

use crate::outcome::{GameResult, Turn, evaluate};
use crate::{Board, Mark, Move, MoveError, Position};
use tracing::{debug, instrument};

/// A single human-vs-computer game.
///
/// Owns the board, whose turn it is, and the move history. Once a move
/// produces a terminal [`GameResult`], every further move is refused.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    human: Mark,
    turn: Turn,
    result: GameResult,
    history: Vec<Move>,
}

impl Game {
    /// Starts an empty game; X moves first.
    #[instrument]
    pub fn new(human: Mark) -> Self {
        Self {
            board: Board::new(),
            human,
            turn: Turn::first(human),
            result: GameResult::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark played by the human.
    pub fn human(&self) -> Mark {
        self.human
    }

    /// Mark played by the computer.
    pub fn computer(&self) -> Mark {
        self.human.opponent()
    }

    /// Side to move. Unchanged once the game is over.
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Mark of the side to move.
    pub fn current_mark(&self) -> Mark {
        match self.turn {
            Turn::Human => self.human(),
            Turn::Computer => self.computer(),
        }
    }

    /// Result after the last move.
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places the current side's mark at `pos`.
    ///
    /// On success the result is recomputed and, if the game continues, the
    /// turn passes to the other side.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game already ended
    /// - [`MoveError::Occupied`] if the cell holds a mark
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn place(&mut self, pos: Position) -> Result<GameResult, MoveError> {
        if self.result.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mark = self.current_mark();
        self.board.place(pos, mark)?;
        self.history.push(Move::new(mark, pos));

        self.result = evaluate(&self.board, self.human);
        if !self.result.is_terminal() {
            self.turn = self.turn.flip();
        }

        debug!(%mark, %pos, result = ?self.result, "Move applied");
        Ok(self.result)
    }
}
