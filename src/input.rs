//! Parsing of interactive input lines.

use derive_more::{Display, Error};
use flawless_tictactoe::Position;
use tracing::instrument;

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place a mark at the position.
    Place(Position),
    /// Start the current game over.
    Restart,
    /// Leave.
    Quit,
    /// Show usage.
    Help,
}

/// Error parsing a line of input.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Nothing was typed.
    #[display("Enter a row and a column, e.g. `1 2`")]
    Empty,
    /// A word that is not a command.
    #[display("Unknown command `{}`", input)]
    Unknown {
        /// What was typed.
        input: String,
    },
    /// A coordinate that is not a number.
    #[display("`{}` is not a number", token)]
    NotANumber {
        /// The offending token.
        token: String,
    },
    /// Not exactly two coordinates.
    #[display("Expected a row and a column, got {} value(s)", found)]
    WrongArity {
        /// Number of values given.
        found: usize,
    },
    /// A coordinate outside 0-2.
    #[display("({}, {}) is off the board; rows and columns run from 0 to 2", row, col)]
    OutOfRange {
        /// Row given.
        row: usize,
        /// Column given.
        col: usize,
    },
}

/// Usage text shown for [`Command::Help`].
pub const HELP: &str = "\
Enter a move as `row col` (0-2 each), e.g. `0 2` for the top-right square.
Commands: r/restart, q/quit, h/help";

/// Parses one line of input.
#[instrument]
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "" => return Err(InputError::Empty),
        "r" | "restart" => return Ok(Command::Restart),
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        "h" | "help" | "?" => return Ok(Command::Help),
        _ => {}
    }

    let tokens: Vec<&str> = trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.iter().all(|t| t.chars().all(|c| c.is_alphabetic())) {
        return Err(InputError::Unknown {
            input: trimmed.to_string(),
        });
    }
    let [row, col] = tokens.as_slice() else {
        return Err(InputError::WrongArity {
            found: tokens.len(),
        });
    };
    let row = parse_coordinate(row)?;
    let col = parse_coordinate(col)?;
    Position::from_coords(row, col)
        .map(Command::Place)
        .ok_or(InputError::OutOfRange { row, col })
}

fn parse_coordinate(token: &str) -> Result<usize, InputError> {
    token.parse().map_err(|_| InputError::NotANumber {
        token: token.to_string(),
    })
}
