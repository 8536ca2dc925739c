//! Board geometry: cells, directions, obstacle orientations.
//!
//! Coordinates are signed so that off-board neighbors of edge cells are
//! representable; bounds checking belongs to the world, not to the cell.

use serde::{Deserialize, Serialize};

/// A board coordinate. Row 0 is the top edge, column 0 the left edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: i16,
    pub col: i16,
}

impl Cell {
    #[must_use]
    pub fn new(row: i16, col: i16) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another cell.
    ///
    /// ```
    /// use gridseek::core::Cell;
    /// assert_eq!(Cell::new(1, 1).manhattan(Cell::new(4, 3)), 5);
    /// ```
    #[must_use]
    pub fn manhattan(self, other: Cell) -> u32 {
        self.row.abs_diff(other.row) as u32 + self.col.abs_diff(other.col) as u32
    }

    /// The cell one step in the given direction. May be off the board.
    #[must_use]
    pub fn step(self, direction: Direction) -> Cell {
        let (dr, dc) = direction.delta();
        Cell::new(self.row + dr, self.col + dc)
    }

    /// The four orthogonal neighbors, in `Direction::ALL` order. Bounds
    /// are not checked here.
    #[must_use]
    pub fn neighbors(self) -> [Cell; 4] {
        [
            self.step(Direction::Up),
            self.step(Direction::Down),
            self.step(Direction::Left),
            self.step(Direction::Right),
        ]
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four orthogonal movement directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order neighbor expansion uses. Keeping
    /// this order fixed keeps path tie-breaking reproducible.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Row/column delta for one step.
    #[must_use]
    pub fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The direction of a single step from one cell to an adjacent
    /// cell, or `None` when the cells are not orthogonally adjacent.
    #[must_use]
    pub fn between(from: Cell, to: Cell) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&d| from.step(d) == to)
    }
}

/// Which adjacent cell a two-cell obstacle extends into from its anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Anchor plus the cell to its right.
    Horizontal,
    /// Anchor plus the cell below.
    Vertical,
}

impl Orientation {
    /// The second cell of a segment anchored at `anchor`.
    #[must_use]
    pub fn extent(self, anchor: Cell) -> Cell {
        match self {
            Orientation::Horizontal => Cell::new(anchor.row, anchor.col + 1),
            Orientation::Vertical => Cell::new(anchor.row + 1, anchor.col),
        }
    }
}
