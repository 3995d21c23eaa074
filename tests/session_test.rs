//! End-to-end tests for a console game session.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;
use std::io::Cursor;
use tictactoe_cli::{
    Console, GameSession, Pacing, Player, Prompter, RandomPlayer, SessionError, SessionErrorKind,
};
use tictactoe_core::{Board, GameResult, Mark, Position};

/// Computer stand-in that plays a fixed list of 1-based cells.
struct ScriptedPlayer {
    moves: VecDeque<(i64, i64)>,
}

impl ScriptedPlayer {
    fn new(moves: &[(i64, i64)]) -> Self {
        Self {
            moves: moves.iter().copied().collect(),
        }
    }
}

impl Player for ScriptedPlayer {
    fn choose_move(
        &mut self,
        _board: &Board,
        _mark: Mark,
        prompter: &mut dyn Prompter,
    ) -> Result<Position, SessionError> {
        prompter.say("Computer is making a move...")?;
        let (row, col) = self
            .moves
            .pop_front()
            .ok_or_else(|| SessionError::new(SessionErrorKind::NoOpenCell))?;
        Ok(Position::from_one_based(row, col)?)
    }

    fn name(&self) -> &str {
        "Scripted"
    }
}

fn run(input: &str, computer: Box<dyn Player>) -> (Result<GameResult, SessionError>, String) {
    let console = Console::new(Cursor::new(input.to_string()), Vec::new());
    let mut session = GameSession::new(console, computer);
    let result = session.run().map(|summary| *summary.result());
    let output = String::from_utf8(session.into_console().into_output()).unwrap();
    (result, output)
}

fn script(symbol: &str, human_moves: &[(i64, i64)]) -> String {
    let mut input = format!("{symbol}\n");
    for (row, col) in human_moves {
        input.push_str(&format!("{row}\n{col}\n"));
    }
    input
}

const ANNOUNCEMENTS: [&str; 3] = ["You Win!", "Computer Wins!", "It's a tie!"];

#[test]
fn test_human_wins_top_row() {
    let input = script("X", &[(1, 1), (1, 2), (1, 3)]);
    let computer = ScriptedPlayer::new(&[(2, 1), (2, 2)]);
    let (result, out) = run(&input, Box::new(computer));

    assert_eq!(result.unwrap(), GameResult::HumanWin);
    assert!(out.ends_with("| X | X | X |\n| O | O |   |\n|   |   |   |\nYou Win!\n"));
}

#[test]
fn test_computer_moves_first_and_wins() {
    let input = script("O", &[(1, 2), (2, 2)]);
    let computer = ScriptedPlayer::new(&[(1, 1), (2, 1), (3, 1)]);
    let (result, out) = run(&input, Box::new(computer));

    assert_eq!(result.unwrap(), GameResult::ComputerWin);
    assert!(out.ends_with("Computer Wins!\n"));
    // Computer announced before the first human prompt.
    let announce = out.find("Computer is making a move...").unwrap();
    let first_prompt = out.find("Select row for O (1-3): ").unwrap();
    assert!(announce < first_prompt);
}

#[test]
fn test_tie_game() {
    // Final board: X O X / X O O / O X X
    let input = script("X", &[(1, 1), (1, 3), (3, 2), (2, 1), (3, 3)]);
    let computer = ScriptedPlayer::new(&[(2, 2), (1, 2), (3, 1), (2, 3)]);
    let (result, out) = run(&input, Box::new(computer));

    assert_eq!(result.unwrap(), GameResult::Draw);
    assert!(out.ends_with("| X | O | X |\n| X | O | O |\n| O | X | X |\nIt's a tie!\n"));
}

#[test]
fn test_session_protocol_order() {
    let input = script("X", &[(1, 1), (1, 2), (1, 3)]);
    let computer = ScriptedPlayer::new(&[(3, 1), (3, 2)]);
    let (_, out) = run(&input, Box::new(computer));

    let expected_start = "Do you want to be X or O? \
                          |   |   |   |\n|   |   |   |\n|   |   |   |\n\
                          Select row for X (1-3): Select column for X (1-3): \
                          | X |   |   |\n|   |   |   |\n|   |   |   |\n\
                          Computer is making a move...\n";
    assert!(out.starts_with(expected_start), "unexpected output:\n{out}");
}

#[test]
fn test_out_of_range_then_same_cell_twice() {
    // "4","1" is out of range; "2","2" is then taken by the human, and the
    // next "2","2" is refused as occupied.
    let input = script("X", &[(4, 1), (2, 2), (2, 2), (1, 1), (3, 3)]);
    let computer = ScriptedPlayer::new(&[(3, 1), (3, 2)]);
    let (result, out) = run(&input, Box::new(computer));

    assert_eq!(result.unwrap(), GameResult::HumanWin);
    assert_eq!(out.matches("Warning: Invalid position!").count(), 1);
    assert_eq!(
        out.matches("Warning: This position is already occupied!").count(),
        1
    );
    // Board after the first accepted move has exactly one mark.
    assert!(out.contains("|   |   |   |\n|   | X |   |\n|   |   |   |\n"));
}

#[test]
fn test_invalid_symbol_warns_once() {
    let input = format!("Z\n{}", script("X", &[(1, 1), (1, 2), (1, 3)]));
    let computer = ScriptedPlayer::new(&[(2, 1), (2, 2)]);
    let (result, out) = run(&input, Box::new(computer));

    assert_eq!(result.unwrap(), GameResult::HumanWin);
    assert_eq!(
        out.matches("Warning: Invalid choice! Please choose either X or O.")
            .count(),
        1
    );
}

#[test]
fn test_input_closed_mid_game() {
    let computer = ScriptedPlayer::new(&[(2, 2)]);
    let (result, _) = run("X\n1\n", Box::new(computer));
    assert_eq!(result.unwrap_err().kind, SessionErrorKind::InputClosed);
}

/// Human walks every cell in order, over and over; warnings absorb cells the
/// random computer already took.
fn cycling_input(symbol: &str) -> String {
    let every_cell: Vec<(i64, i64)> = (1..=3)
        .flat_map(|row| (1..=3).map(move |col| (row, col)))
        .collect();
    let cycles: Vec<(i64, i64)> = every_cell.iter().copied().cycle().take(9 * 6).collect();
    script(symbol, &cycles)
}

#[test]
fn test_random_computer_game_finishes() {
    for seed in 0..25 {
        for symbol in ["X", "O"] {
            let computer =
                RandomPlayer::new("Computer", ChaCha8Rng::seed_from_u64(seed), Pacing::none());
            let (result, out) = run(&cycling_input(symbol), Box::new(computer));

            let result = result.unwrap();
            assert!(result.is_terminal());
            let announced: Vec<_> = ANNOUNCEMENTS.iter().filter(|a| out.contains(**a)).collect();
            assert_eq!(announced, vec![&result.announcement().unwrap()]);
        }
    }
}

#[test]
fn test_same_seed_replays_the_same_game() {
    let play = || {
        let computer = RandomPlayer::new("Computer", ChaCha8Rng::seed_from_u64(3), Pacing::none());
        run(&cycling_input("O"), Box::new(computer)).1
    };
    assert_eq!(play(), play());
}
