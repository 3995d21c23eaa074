//! Player trait and implementations.

mod human;
mod random;

pub use human::HumanPlayer;
pub use random::{Pacing, RandomPlayer};

use crate::console::Prompter;
use crate::error::SessionError;
use tictactoe_core::{Board, Mark, Position};

/// Anything that can pick a cell to play.
pub trait Player {
    /// Chooses an empty position for `mark` on `board`.
    ///
    /// Implementations retry internally until they find a legal cell; an
    /// error means the session cannot continue.
    fn choose_move(
        &mut self,
        board: &Board,
        mark: Mark,
        prompter: &mut dyn Prompter,
    ) -> Result<Position, SessionError>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
