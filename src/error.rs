//! Session error types.

use derive_more::{Display, Error};
use tictactoe_core::MoveError;
use tracing::instrument;

/// What went wrong during a session.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SessionErrorKind {
    /// Reading or writing the console failed.
    #[display("I/O error: {}", _0)]
    Io(String),

    /// Input reached end-of-stream while waiting for an answer.
    #[display("Input closed before the game finished")]
    InputClosed,

    /// A move was refused by the game.
    #[display("{}", _0)]
    Move(MoveError),

    /// The computer was asked to move on a full board.
    #[display("No open cell left for the computer")]
    NoOpenCell,
}

/// Session error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Session error: {} at {}:{}", kind, file, line)]
pub struct SessionError {
    /// What failed.
    pub kind: SessionErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SessionError {
    /// Creates a new session error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: SessionErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for SessionError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(SessionErrorKind::Io(err.to_string()))
    }
}

impl From<MoveError> for SessionError {
    #[track_caller]
    fn from(err: MoveError) -> Self {
        Self::new(SessionErrorKind::Move(err))
    }
}
