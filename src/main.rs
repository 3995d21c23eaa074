//! Tic-tac-toe on the console.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tictactoe_cli::{Cli, Console, GameSession, Pacing, RandomPlayer};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing();

    let rng = match cli.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let computer = RandomPlayer::new("Computer", rng, Pacing::new(cli.pace()));

    let console = Console::new(std::io::stdin().lock(), std::io::stdout());
    let mut session = GameSession::new(console, Box::new(computer));
    let summary = session.run()?;

    info!(
        human = %summary.human(),
        result = ?summary.result(),
        moves = summary.moves().len(),
        "Session finished"
    );
    Ok(())
}

/// Diagnostics go to stderr so they never mix with the game on stdout.
#[instrument]
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .init();
}
