//! Completing moves and forks.
//!
//! A completing move is an empty cell that would give a player three in a
//! row. A player with more than one distinct completing cell has a fork: the
//! opponent can block only one of them.

use super::{Board, Player, Position, lines};
use tracing::{instrument, trace};

/// Cells that would complete a line for `player`, in line enumeration order.
///
/// A cell that completes two lines at once is listed once per line.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn completing_moves(board: &Board, player: Player) -> Vec<Position> {
    lines::all()
        .filter_map(|line| line.completing_cell(board, player))
        .collect()
}

/// Returns true when `player` has two or more distinct completing cells.
pub fn has_fork(board: &Board, player: Player) -> bool {
    let moves = completing_moves(board, player);
    moves.iter().any(|&pos| pos != moves[0])
}

/// First empty cell (row-major) where `player` would create a fork.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn forking_move(board: &Board, player: Player) -> Option<Position> {
    let found = board
        .empty_positions()
        .find(|&pos| has_fork(&board.with(pos, player), player));
    trace!(?found, "Forking move search finished");
    found
}
