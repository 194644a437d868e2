//! Rule-based move selection.
//!
//! The engine walks a fixed priority chain and commits to the first rule
//! that produces a cell. Later rules are never evaluated once an earlier
//! one has fired:
//!
//! 1. Win: complete one of our own lines.
//! 2. Block: occupy the cell that would complete an opponent line.
//! 3. Fork: create two distinct completing cells at once.
//! 4. Block an opponent fork, preferably by forcing (a single threat whose
//!    forced reply does not hand the opponent a fork), otherwise directly.
//! 5. Take the centre.
//! 6. Take the corner opposite an opponent corner.
//! 7. Take any corner, then any side.
//!
//! Lookahead in rules 3 and 4 works on copies made with [`Board::with`];
//! the input board is never modified.

use super::threats::{completing_moves, forking_move, has_fork};
use super::{Board, Player, Position};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// The rule that produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Completed a line.
    #[display("win")]
    Win,
    /// Blocked an opponent line.
    #[display("block")]
    Block,
    /// Created two threats at once.
    #[display("fork")]
    Fork,
    /// Created a single threat whose forced answer gives the opponent no fork.
    #[display("forcing move against a fork")]
    ForcingBlock,
    /// Occupied the opponent's forking cell.
    #[display("direct fork block")]
    DirectForkBlock,
    /// Took the centre.
    #[display("center")]
    Center,
    /// Took the corner opposite an opponent corner.
    #[display("opposite corner")]
    OppositeCorner,
    /// Took a free corner.
    #[display("empty corner")]
    EmptyCorner,
    /// Took a free side.
    #[display("empty side")]
    EmptySide,
}

/// A chosen cell and the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Decision {
    /// Cell to play.
    pub position: Position,
    /// Rule that fired.
    pub strategy: Strategy,
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.position, self.strategy)
    }
}

/// Selects the engine's next move, or `None` when the board is full.
#[instrument(level = "debug", skip(board), fields(board = %board))]
pub fn select_move(board: &Board, engine: Player) -> Option<Decision> {
    let decision = win(board, engine)
        .or_else(|| block(board, engine))
        .or_else(|| fork(board, engine))
        .or_else(|| block_fork(board, engine))
        .or_else(|| center(board))
        .or_else(|| opposite_corner(board, engine))
        .or_else(|| corner_or_side(board));

    match &decision {
        Some(d) => debug!(position = %d.position, strategy = %d.strategy, "Move selected"),
        None => debug!("No empty square, nothing to play"),
    }
    decision
}

fn win(board: &Board, engine: Player) -> Option<Decision> {
    completing_moves(board, engine)
        .first()
        .map(|&pos| Decision::new(pos, Strategy::Win))
}

fn block(board: &Board, engine: Player) -> Option<Decision> {
    completing_moves(board, engine.opponent())
        .first()
        .map(|&pos| Decision::new(pos, Strategy::Block))
}

fn fork(board: &Board, engine: Player) -> Option<Decision> {
    board
        .empty_positions()
        .find(|&pos| has_fork(&board.with(pos, engine), engine))
        .map(|pos| Decision::new(pos, Strategy::Fork))
}

fn block_fork(board: &Board, engine: Player) -> Option<Decision> {
    let threat = forking_move(board, engine.opponent())?;
    trace!(%threat, "Opponent can fork");

    match forcing_move(board, engine) {
        Some(pos) => Some(Decision::new(pos, Strategy::ForcingBlock)),
        None => Some(Decision::new(threat, Strategy::DirectForkBlock)),
    }
}

/// First empty cell (row-major) that gives the engine exactly one
/// completing cell, such that the opponent filling it gets no fork.
fn forcing_move(board: &Board, engine: Player) -> Option<Position> {
    let opponent = engine.opponent();
    board.empty_positions().find(|&pos| {
        let next = board.with(pos, engine);
        let threats = completing_moves(&next, engine);
        let Some(&reply) = threats.first() else {
            return false;
        };
        if threats.iter().any(|&t| t != reply) {
            return false;
        }
        let safe = !has_fork(&next.with(reply, opponent), opponent);
        trace!(%pos, %reply, safe, "Forcing candidate");
        safe
    })
}

fn center(board: &Board) -> Option<Decision> {
    board
        .is_empty(Position::Center)
        .then(|| Decision::new(Position::Center, Strategy::Center))
}

fn opposite_corner(board: &Board, engine: Player) -> Option<Decision> {
    let opponent = engine.opponent();
    Position::CORNERS
        .into_iter()
        .find(|&corner| board.is_owned_by(corner, opponent) && board.is_empty(corner.opposite()))
        .map(|corner| Decision::new(corner.opposite(), Strategy::OppositeCorner))
}

fn corner_or_side(board: &Board) -> Option<Decision> {
    Position::CORNERS
        .into_iter()
        .chain(Position::SIDES)
        .find(|&pos| board.is_empty(pos))
        .map(|pos| {
            let strategy = if pos.is_corner() {
                Strategy::EmptyCorner
            } else {
                Strategy::EmptySide
            };
            Decision::new(pos, strategy)
        })
}
