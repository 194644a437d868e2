//! Board coordinates.
//!
//! A [`Position`] names one of the nine cells. Because the enum can only
//! express cells inside the 3x3 grid, every coordinate produced inside the
//! engine is in bounds by construction; raw `(row, col)` pairs from the
//! outside world go through [`Position::from_coords`].

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the tic-tac-toe board, in row-major order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Row 0, column 0.
    TopLeft,
    /// Row 0, column 1.
    TopCenter,
    /// Row 0, column 2.
    TopRight,
    /// Row 1, column 0.
    MiddleLeft,
    /// Row 1, column 1.
    Center,
    /// Row 1, column 2.
    MiddleRight,
    /// Row 2, column 0.
    BottomLeft,
    /// Row 2, column 1.
    BottomCenter,
    /// Row 2, column 2.
    BottomRight,
}

impl Position {
    /// All nine positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Corners in preference order: each diagonal pair is listed together.
    pub const CORNERS: [Position; 4] = [
        Position::TopLeft,
        Position::BottomRight,
        Position::TopRight,
        Position::BottomLeft,
    ];

    /// Edge midpoints in preference order.
    pub const SIDES: [Position; 4] = [
        Position::TopCenter,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
    ];

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row of this cell (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this cell (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Creates a position from a `(row, col)` pair, or `None` if either is
    /// outside `0..3`.
    #[instrument]
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// The cell reflected through the centre: `(2 - row, 2 - col)`.
    pub fn opposite(self) -> Self {
        Self::ALL[8 - self.to_index()]
    }

    /// Returns true for the four corner cells.
    pub fn is_corner(self) -> bool {
        Self::CORNERS.contains(&self)
    }

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}
