//! Console tic-tac-toe against a random-move computer.
//!
//! # Architecture
//!
//! - **Console**: line-oriented prompts over any reader/writer
//! - **Players**: the human at the keyboard and a random-move computer
//! - **Session**: symbol choice and the alternating turn loop
//!
//! Board, rules and turn order live in [`tictactoe_core`].
//!
//! # Example
//!
//! ```no_run
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use tictactoe_cli::{Console, GameSession, Pacing, RandomPlayer};
//!
//! # fn example() -> Result<(), tictactoe_cli::SessionError> {
//! let console = Console::new(std::io::stdin().lock(), std::io::stdout());
//! let computer = RandomPlayer::new("Computer", ChaCha8Rng::from_entropy(), Pacing::default());
//! let summary = GameSession::new(console, Box::new(computer)).run()?;
//! println!("{:?}", summary.result());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod console;
mod error;
mod players;
mod session;

pub use cli::Cli;
pub use console::{Console, Prompter};
pub use error::{SessionError, SessionErrorKind};
pub use players::{HumanPlayer, Pacing, Player, RandomPlayer};
pub use session::{GameSession, GameSummary, choose_symbol};
