//! Two-of-a-kind detection on a single line.

use super::lines::Line;
use super::{Board, Player, Position, Square};

/// Index of the empty cell when the triple holds exactly two of `player`'s
/// symbols and exactly one empty square; `None` otherwise.
pub fn two_of_a_kind(squares: [Square; 3], player: Player) -> Option<usize> {
    let mut empty = None;
    let mut owned = 0;
    for (i, square) in squares.into_iter().enumerate() {
        match square {
            Square::Empty if empty.is_some() => return None,
            Square::Empty => empty = Some(i),
            Square::Occupied(p) if p == player => owned += 1,
            Square::Occupied(_) => {}
        }
    }
    if owned == 2 { empty } else { None }
}

impl Line {
    /// The cell that would complete this line for `player`, if any.
    pub fn completing_cell(&self, board: &Board, player: Player) -> Option<Position> {
        two_of_a_kind(self.squares(board), player).map(|i| self.cells()[i])
    }
}
