//! Text rendering of the board.

use crossterm::style::Stylize;
use flawless_tictactoe::{Board, LastMoves, Player, Position, Square};

/// Renders the board with a coordinate header, e.g.:
///
/// ```text
///   0 1 2
/// 0 X|X|O
///   -----
/// 1  |O|
///   -----
/// 2 X| |
/// ```
///
/// With `color` on, the engine's last move is red and the opponent's green.
pub fn board_string(board: &Board, last_moves: &LastMoves, engine: Player, color: bool) -> String {
    let mut result = String::from("  0 1 2\n");
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .filter_map(|col| Position::from_coords(row, col))
            .map(|pos| cell(board, last_moves, engine, pos, color))
            .collect();
        result.push_str(&format!("{} {}\n", row, cells.join("|")));
        if row < 2 {
            result.push_str("  -----\n");
        }
    }
    result
}

fn cell(board: &Board, last_moves: &LastMoves, engine: Player, pos: Position, color: bool) -> String {
    let Square::Occupied(player) = board.get(pos) else {
        return " ".to_string();
    };
    let symbol = player.to_string();
    if !color {
        return symbol;
    }
    if player == engine && last_moves.engine == Some(pos) {
        symbol.red().to_string()
    } else if player != engine && last_moves.opponent == Some(pos) {
        symbol.green().to_string()
    } else {
        symbol
    }
}
