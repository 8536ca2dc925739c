//! Board geometry plus the mutable obstacle and feature sets.
//!
//! ## Occupancy mask
//!
//! `GridWorld` mirrors every committed obstacle's two cells into a
//! persistent `im::HashSet`. The AI probes candidate placements against
//! O(1) clones of that set (`blocked_with`), so speculation never touches
//! committed state and there is no mutate-then-undo step to get wrong.

use im::HashSet as ImHashSet;
use serde::{Deserialize, Serialize};

use super::obstacle::Obstacle;
use crate::core::Cell;

/// The board: fixed size and adjacency, plus obstacles, hiding spots and
/// the optional freeze collectible.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridWorld {
    size: i16,
    /// Committed obstacles, append-only within a round.
    obstacles: Vec<Obstacle>,
    /// Every cell covered by a committed obstacle.
    blocked: ImHashSet<Cell>,
    /// Cells eligible to hold the hidden target or the collectible.
    hiding_spots: Vec<Cell>,
    /// Freeze power-up, if not yet collected.
    collectible: Option<Cell>,
}

impl GridWorld {
    /// Create an empty world of the given side length.
    #[must_use]
    pub fn new(size: i16) -> Self {
        Self {
            size,
            obstacles: Vec::new(),
            blocked: ImHashSet::new(),
            hiding_spots: Vec::new(),
            collectible: None,
        }
    }

    /// Board side length.
    #[must_use]
    pub fn size(&self) -> i16 {
        self.size
    }

    /// Whether a cell lies on the board.
    #[must_use]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        (0..self.size).contains(&cell.row) && (0..self.size).contains(&cell.col)
    }

    /// Whether a cell is covered by a committed obstacle.
    #[must_use]
    pub fn is_blocked(&self, cell: Cell) -> bool {
        self.blocked.contains(&cell)
    }

    /// Whether a cell is a hiding spot.
    #[must_use]
    pub fn is_hiding_spot(&self, cell: Cell) -> bool {
        self.hiding_spots.contains(&cell)
    }

    /// Whether a cell is one of the four board corners.
    #[must_use]
    pub fn is_corner(&self, cell: Cell) -> bool {
        let edge = self.size - 1;
        (cell.row == 0 || cell.row == edge) && (cell.col == 0 || cell.col == edge)
    }

    /// Committed obstacles in placement order.
    #[must_use]
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// The obstacle occupancy mask.
    #[must_use]
    pub fn blocked(&self) -> &ImHashSet<Cell> {
        &self.blocked
    }

    /// A clone of the occupancy mask with extra cells marked blocked.
    /// O(1) structural clone; the committed mask is untouched.
    #[must_use]
    pub fn blocked_with(&self, extra: [Cell; 2]) -> ImHashSet<Cell> {
        let mut overlay = self.blocked.clone();
        overlay.insert(extra[0]);
        overlay.insert(extra[1]);
        overlay
    }

    /// Hiding spots for this round.
    #[must_use]
    pub fn hiding_spots(&self) -> &[Cell] {
        &self.hiding_spots
    }

    /// Set the hiding-spot set (round construction only).
    pub fn set_hiding_spots(&mut self, spots: Vec<Cell>) {
        self.hiding_spots = spots;
    }

    /// The collectible's position, if it has not been picked up.
    #[must_use]
    pub fn collectible(&self) -> Option<Cell> {
        self.collectible
    }

    /// Place the collectible (round construction only).
    pub fn set_collectible(&mut self, cell: Option<Cell>) {
        self.collectible = cell;
    }

    /// Remove the collectible if it sits on `cell`. Returns whether a
    /// pickup happened.
    pub fn take_collectible(&mut self, cell: Cell) -> bool {
        if self.collectible == Some(cell) {
            self.collectible = None;
            true
        } else {
            false
        }
    }

    /// Append a validated obstacle and mark its cells blocked.
    ///
    /// Callers go through `placement::place`, which validates first; this
    /// method never re-checks.
    pub(crate) fn commit_obstacle(&mut self, obstacle: Obstacle) {
        for cell in obstacle.cells() {
            self.blocked.insert(cell);
        }
        self.obstacles.push(obstacle);
    }
}
