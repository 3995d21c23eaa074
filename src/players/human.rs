//! Human player reading coordinates from the console.

use super::Player;
use crate::console::Prompter;
use crate::error::SessionError;
use std::num::IntErrorKind;
use tictactoe_core::{Board, Mark, Position};
use tracing::{debug, instrument};

const INVALID_INPUT: &str =
    "Invalid input! Please enter a number from 1 to 3 for both row and column.";
const INVALID_POSITION: &str =
    "Invalid position! Please enter a number from 1 to 3 for both row and column.";
const OCCUPIED: &str = "This position is already occupied!";

/// Reads one coordinate as an integer.
///
/// Integers too large for `i64` saturate so they land on the out-of-range
/// path instead of being treated as non-numeric.
fn parse_coordinate(text: &str) -> Option<i64> {
    match text.trim().parse::<i64>() {
        Ok(value) => Some(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// Human player that types a row and a column.
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for HumanPlayer {
    fn default() -> Self {
        Self::new("You")
    }
}

impl Player for HumanPlayer {
    #[instrument(skip(self, board, prompter), fields(player = %self.name))]
    fn choose_move(
        &mut self,
        board: &Board,
        mark: Mark,
        prompter: &mut dyn Prompter,
    ) -> Result<Position, SessionError> {
        loop {
            let row = prompter.ask(&format!("Select row for {mark} (1-3): "))?;
            let col = prompter.ask(&format!("Select column for {mark} (1-3): "))?;

            let (Some(row), Some(col)) = (parse_coordinate(&row), parse_coordinate(&col)) else {
                prompter.warn(INVALID_INPUT)?;
                continue;
            };

            match Position::from_one_based(row, col) {
                Err(_) => prompter.warn(INVALID_POSITION)?,
                Ok(pos) if !board.is_empty(pos) => prompter.warn(OCCUPIED)?,
                Ok(pos) => {
                    debug!(%pos, "Human chose position");
                    return Ok(pos);
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
