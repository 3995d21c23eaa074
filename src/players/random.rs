//! Computer player that picks uniformly random cells.

use super::Player;
use crate::console::Prompter;
use crate::error::{SessionError, SessionErrorKind};
use rand::Rng;
use std::time::Duration;
use tictactoe_core::{Board, Mark, Position};
use tracing::{debug, instrument};

/// Presentation pauses around the computer's move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    delay: Duration,
}

impl Pacing {
    /// Pauses for `delay` each time.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// No pauses at all.
    pub fn none() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Length of one pause.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Blocks the thread for one pause.
    pub fn pause(&self) {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

/// Computer opponent drawing (row, col) pairs until one is empty.
#[derive(Debug, Clone)]
pub struct RandomPlayer<G> {
    name: String,
    rng: G,
    pacing: Pacing,
}

impl<G: Rng> RandomPlayer<G> {
    /// Creates a random player with the given generator and pacing.
    pub fn new(name: impl Into<String>, rng: G, pacing: Pacing) -> Self {
        Self {
            name: name.into(),
            rng,
            pacing,
        }
    }
}

impl<G: Rng> Player for RandomPlayer<G> {
    #[instrument(skip(self, board, prompter), fields(player = %self.name))]
    fn choose_move(
        &mut self,
        board: &Board,
        mark: Mark,
        prompter: &mut dyn Prompter,
    ) -> Result<Position, SessionError> {
        let open = Position::open_cells(board);
        if open.is_empty() {
            return Err(SessionError::new(SessionErrorKind::NoOpenCell));
        }
        debug!(open = open.len(), "Open cells before drawing");

        self.pacing.pause();
        prompter.say("Computer is making a move...")?;
        self.pacing.pause();

        let mut trials = 0u32;
        loop {
            trials += 1;
            let row = self.rng.gen_range(0..3);
            let col = self.rng.gen_range(0..3);
            if let Some(pos) = Position::new(row, col).filter(|p| board.is_empty(*p)) {
                debug!(%pos, trials, "Computer chose position");
                return Ok(pos);
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
