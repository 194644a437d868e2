//! The eight winning lines of the board.
//!
//! Lines are listed in a fixed order that every "first found" decision in
//! the engine depends on: rows top to bottom, columns left to right, the
//! forward diagonal, then the backward diagonal.

use super::{Board, Position, Square};
use serde::{Deserialize, Serialize};

/// Which family a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// A horizontal row.
    Row,
    /// A vertical column.
    Column,
    /// `(0,0)` through `(2,2)`.
    ForwardDiagonal,
    /// `(0,2)` through `(2,0)`.
    BackwardDiagonal,
}

/// Three cells that win the game when held by one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    kind: LineKind,
    cells: [Position; 3],
}

use Position::*;

/// All lines in enumeration order.
pub const LINES: [Line; 8] = [
    Line::new(LineKind::Row, [TopLeft, TopCenter, TopRight]),
    Line::new(LineKind::Row, [MiddleLeft, Center, MiddleRight]),
    Line::new(LineKind::Row, [BottomLeft, BottomCenter, BottomRight]),
    Line::new(LineKind::Column, [TopLeft, MiddleLeft, BottomLeft]),
    Line::new(LineKind::Column, [TopCenter, Center, BottomCenter]),
    Line::new(LineKind::Column, [TopRight, MiddleRight, BottomRight]),
    Line::new(LineKind::ForwardDiagonal, [TopLeft, Center, BottomRight]),
    Line::new(LineKind::BackwardDiagonal, [TopRight, Center, BottomLeft]),
];

/// Iterates the eight lines in enumeration order.
pub fn all() -> impl Iterator<Item = &'static Line> {
    LINES.iter()
}

impl Line {
    const fn new(kind: LineKind, cells: [Position; 3]) -> Self {
        Self { kind, cells }
    }

    /// The line's family.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// The three cells, in order along the line.
    pub fn cells(&self) -> [Position; 3] {
        self.cells
    }

    /// The current contents of the three cells.
    pub fn squares(&self, board: &Board) -> [Square; 3] {
        self.cells.map(|pos| board.get(pos))
    }
}
