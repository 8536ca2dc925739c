//! Two-cell obstacle segments.

use serde::{Deserialize, Serialize};

use crate::core::{AgentId, Cell, Orientation};

/// A committed obstacle. Immutable once placed; the obstacle set only
/// grows during a round and is cleared by round reconstruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Anchor cell.
    pub anchor: Cell,
    /// Which adjacent cell the segment extends into.
    pub orientation: Orientation,
    /// The agent that placed it.
    pub owner: AgentId,
}

impl Obstacle {
    /// Create an obstacle.
    #[must_use]
    pub fn new(anchor: Cell, orientation: Orientation, owner: AgentId) -> Self {
        Self {
            anchor,
            orientation,
            owner,
        }
    }

    /// The two cells this obstacle occupies.
    #[must_use]
    pub fn cells(&self) -> [Cell; 2] {
        [self.anchor, self.orientation.extent(self.anchor)]
    }
}

/// The two cells a placement at `anchor` with `orientation` would occupy.
#[must_use]
pub fn footprint(anchor: Cell, orientation: Orientation) -> [Cell; 2] {
    [anchor, orientation.extent(anchor)]
}
