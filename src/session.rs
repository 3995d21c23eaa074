//! One interactive game from symbol choice to final announcement.

use crate::console::{Console, Prompter};
use crate::error::SessionError;
use crate::players::{HumanPlayer, Player};
use derive_getters::Getters;
use derive_new::new;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tictactoe_core::{Board, Game, GameResult, Mark, Move, Turn};
use tracing::{debug, info, instrument};

const SYMBOL_PROMPT: &str = "Do you want to be X or O? ";
const INVALID_CHOICE: &str = "Invalid choice! Please choose either X or O.";

/// Asks until the answer is exactly `X` or `O`.
///
/// Case matters: `x` and `o` are rejected like any other answer.
#[instrument(skip(prompter))]
pub fn choose_symbol(prompter: &mut dyn Prompter) -> Result<Mark, SessionError> {
    loop {
        let answer = prompter.ask(SYMBOL_PROMPT)?;
        match Mark::from_str(&answer) {
            Ok(mark) => {
                debug!(%mark, "Human picked symbol");
                return Ok(mark);
            }
            Err(_) => prompter.warn(INVALID_CHOICE)?,
        }
    }
}

/// How a finished game went.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct GameSummary {
    /// Mark the human played.
    human: Mark,
    /// Terminal result.
    result: GameResult,
    /// Every move in order.
    moves: Vec<Move>,
}

/// Drives a game between the console user and a computer player.
pub struct GameSession<R, W> {
    console: Console<R, W>,
    human: HumanPlayer,
    computer: Box<dyn Player>,
}

impl<R: BufRead, W: Write> GameSession<R, W> {
    /// Creates a session playing `computer` over `console`.
    pub fn new(console: Console<R, W>, computer: Box<dyn Player>) -> Self {
        Self {
            console,
            human: HumanPlayer::default(),
            computer,
        }
    }

    /// Plays one game to completion.
    ///
    /// Renders the board after every move and announces the result once the
    /// game is won or tied.
    #[instrument(skip(self), fields(computer = %self.computer.name()))]
    pub fn run(&mut self) -> Result<GameSummary, SessionError> {
        info!("Starting game session");

        let human = choose_symbol(&mut self.console)?;
        let mut game = Game::new(human);
        self.render(game.board())?;

        loop {
            let mark = game.current_mark();
            let player: &mut dyn Player = match game.turn() {
                Turn::Human => &mut self.human,
                Turn::Computer => self.computer.as_mut(),
            };
            debug!(player = %player.name(), %mark, "Waiting for move");
            let pos = player.choose_move(game.board(), mark, &mut self.console)?;

            let result = game.place(pos)?;
            self.render(game.board())?;

            if let Some(line) = result.announcement() {
                self.console.say(line)?;
                info!(?result, moves = game.history().len(), "Game over");
                return Ok(GameSummary::new(human, result, game.history().to_vec()));
            }
        }
    }

    /// Returns the console, consuming the session.
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    fn render(&mut self, board: &Board) -> Result<(), SessionError> {
        for line in board.to_string().lines() {
            self.console.say(line)?;
        }
        Ok(())
    }
}
