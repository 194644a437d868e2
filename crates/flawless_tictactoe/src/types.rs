//! Core domain types for tic-tac-toe.

use super::{MoveError, Position};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{instrument, warn};

/// Player symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Notation character: `X`, `O`, or `.` for an empty square.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// The board is `Copy`: hypothetical placements are made on a copy through
/// [`Board::with`], leaving the original untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position unconditionally.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns true when the square holds `player`'s symbol.
    pub fn is_owned_by(&self, pos: Position, player: Player) -> bool {
        self.get(pos) == Square::Occupied(player)
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|&pos| self.is_empty(pos))
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Number of squares holding `player`'s symbol.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|&&s| s == Square::Occupied(player))
            .count()
    }

    /// Places `player`'s symbol on an empty square.
    ///
    /// Fails without touching the board when the square is taken.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, player: Player) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            warn!(%pos, "Placement on occupied square rejected");
            return Err(MoveError::SquareOccupied(pos));
        }
        self.set(pos, Square::Occupied(player));
        Ok(())
    }

    /// Returns a copy of the board with `player` occupying `pos`.
    ///
    /// Used for lookahead: the caller's board is never modified, so there is
    /// nothing to restore afterwards.
    pub fn with(&self, pos: Position, player: Player) -> Self {
        let mut next = *self;
        next.set(pos, Square::Occupied(player));
        next
    }

    /// Compact notation: nine characters, rows separated by `/`.
    ///
    /// ```
    /// use flawless_tictactoe::{Board, Player, Position};
    ///
    /// let board = Board::new().with(Position::Center, Player::X);
    /// assert_eq!(board.notation(), ".../.X./...");
    /// ```
    pub fn notation(&self) -> String {
        let mut out = String::with_capacity(11);
        for (i, square) in self.squares.iter().enumerate() {
            if i > 0 && i % 3 == 0 {
                out.push('/');
            }
            out.push(square.symbol());
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Error parsing board notation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardParseError {
    /// A character that is neither a symbol, an empty marker nor a separator.
    #[display("Unexpected character {:?} in board notation", character)]
    InvalidCharacter {
        /// The offending character.
        character: char,
    },
    /// The notation did not describe exactly nine squares.
    #[display("Board notation must describe 9 squares, found {}", found)]
    WrongLength {
        /// Number of squares found.
        found: usize,
    },
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses `X`/`O` (either case) and `.`, `-`, `_` or a space for empty
    /// squares. `/`, `|`, commas and newlines are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(9);
        for character in s.chars() {
            let square = match character {
                'x' | 'X' => Square::Occupied(Player::X),
                'o' | 'O' => Square::Occupied(Player::O),
                '.' | '-' | '_' | ' ' => Square::Empty,
                '/' | '|' | ',' | '\n' | '\r' => continue,
                _ => return Err(BoardParseError::InvalidCharacter { character }),
            };
            squares.push(square);
        }
        let squares: [Square; 9] = squares
            .try_into()
            .map_err(|v: Vec<Square>| BoardParseError::WrongLength { found: v.len() })?;
        Ok(Self { squares })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.notation())
    }
}

/// Most recent placement of each side, kept for display only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastMoves {
    /// Last cell the engine played.
    pub engine: Option<Position>,
    /// Last cell the opponent played.
    pub opponent: Option<Position>,
}
