//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here is cached: the board
//! changes between queries, so the outcome is always recomputed.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_winner;

use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and at least one square is empty.
    InProgress,
    /// The player holds a complete line.
    Won(Player),
    /// The board is full with no complete line.
    Draw,
}

impl Outcome {
    /// Returns true once the game is over.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(*player),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Evaluates the board: a win, a draw, or a game still in progress.
#[instrument(level = "debug", skip(board), fields(board = %board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Won(winner)
    } else if is_draw(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
