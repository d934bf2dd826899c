use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell address. Two cells are the same cell iff row and column match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to `other`.
    pub fn distance(&self, other: Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    pub fn is_adjacent(&self, other: Position) -> bool {
        self.distance(other) == 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Minimal grid interface consumed by the traversal engine.
///
/// Implementors decide what "valid" means: at the very least the position
/// must be in bounds, and grids with obstacles also reject blocked cells.
pub trait Grid {
    fn rows(&self) -> usize;

    fn cols(&self) -> usize;

    /// Whether the cell at (`row`, `col`) exists and can be entered.
    fn is_valid_cell(&self, row: usize, col: usize) -> bool;

    fn start(&self) -> Position;

    fn end(&self) -> Position;
}
