//! Command-line interface for tictactoe.

use clap::Parser;
use std::time::Duration;

/// Play tic-tac-toe against a computer that moves at random
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Console tic-tac-toe against a random-move computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Seed for the computer's moves (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Length of each pause around the computer's move, in milliseconds
    #[arg(long, default_value = "1000")]
    pub pace_ms: u64,
}

impl Cli {
    /// Pause length as a duration.
    pub fn pace(&self) -> Duration {
        Duration::from_millis(self.pace_ms)
    }
}
