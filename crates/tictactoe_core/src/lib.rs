//! Tic-tac-toe rules without any I/O.
//!
//! # Architecture
//!
//! - **Types**: marks, cells and the 3x3 board
//! - **Position**: validated coordinates, including 1-based parsing
//! - **Rules**: win and draw detection over the eight winning lines
//! - **Game**: turn alternation and terminal detection
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Game, GameResult, Mark, Position};
//!
//! let mut game = Game::new(Mark::X);
//! let result = game.place(Position::from_one_based(2, 2)?)?;
//! assert_eq!(result, GameResult::InProgress);
//! # Ok::<(), tictactoe_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod outcome;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::Game;
pub use outcome::{GameResult, Turn, evaluate};
pub use position::Position;
pub use rules::{check_winner, is_draw, is_full, winner};
pub use types::{Board, Cell, Mark};
