//! Line-oriented console I/O.

use crate::error::{SessionError, SessionErrorKind};
use std::io::{BufRead, Write};
use tracing::{instrument, warn};

/// Prompt-and-answer interface the players talk through.
pub trait Prompter {
    /// Writes `prompt` without a newline and reads one line of input.
    ///
    /// The returned line has its line terminator removed and nothing else.
    fn ask(&mut self, prompt: &str) -> Result<String, SessionError>;

    /// Writes a line of output.
    fn say(&mut self, line: &str) -> Result<(), SessionError>;

    /// Reports rejected input to the user.
    ///
    /// The warning goes to the same output as the prompts, not to stderr, so
    /// it appears in order with them. The tracing `warn!` copy stays hidden
    /// under the default `error` filter.
    fn warn(&mut self, message: &str) -> Result<(), SessionError>;
}

/// [`Prompter`] over any buffered reader and writer.
///
/// The binary wires this to stdin/stdout; tests use in-memory buffers.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the writer, consuming the console.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for Console<R, W> {
    #[instrument(skip(self))]
    fn ask(&mut self, prompt: &str) -> Result<String, SessionError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::new(SessionErrorKind::InputClosed));
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    fn say(&mut self, line: &str) -> Result<(), SessionError> {
        writeln!(self.output, "{line}")?;
        self.output.flush()?;
        Ok(())
    }

    fn warn(&mut self, message: &str) -> Result<(), SessionError> {
        warn!(reason = message, "Rejected input");
        self.say(&format!("Warning: {message}"))
    }
}
