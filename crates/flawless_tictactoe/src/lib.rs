//! Flawless tic-tac-toe - a rule-based engine that never loses.
//!
//! The engine does no game-tree search. It evaluates a fixed chain of
//! rules (win, block, fork, block a fork, centre, opposite corner, any
//! corner, any side) built on a single primitive: a line holding two of a
//! symbol and one empty square.
//!
//! # Architecture
//!
//! - **Lines**: the eight winning triples in a stable order
//! - **Pattern**: two-of-a-kind detection on one line
//! - **Threats**: completing moves, forks and forking moves
//! - **Strategy**: the move selector
//! - **Rules**: win/draw detection
//! - **Session**: a game against an outside opponent
//!
//! # Example
//!
//! ```
//! use flawless_tictactoe::{Board, Player, Position, Strategy, select_move};
//!
//! let board: Board = "X../X../...".parse()?;
//! let decision = select_move(&board, Player::O).expect("board has empty squares");
//! assert_eq!(decision.position, Position::BottomLeft);
//! assert_eq!(decision.strategy, Strategy::Block);
//! # Ok::<(), flawless_tictactoe::BoardParseError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod lines;
mod pattern;
mod position;
pub mod rules;
mod session;
mod strategy;
pub mod threats;
mod types;

// Crate-level exports - Domain types
pub use error::MoveError;
pub use position::Position;
pub use types::{Board, BoardParseError, LastMoves, Player, Square};

// Crate-level exports - Analysis
pub use lines::{Line, LineKind};
pub use pattern::two_of_a_kind;
pub use rules::{Outcome, evaluate};
pub use strategy::{Decision, Strategy, select_move};
pub use threats::{completing_moves, forking_move, has_fork};

// Crate-level exports - Session management
pub use session::{FirstMover, Session, Turn, Verdict};
