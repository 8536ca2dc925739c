//! Shortest-path oracle over the 4-connected grid.
//!
//! The single source of truth for "closeness": proximity feedback and
//! every AI decision measure distance through this module. Unreachable
//! is a normal value, not an error; once enough obstacles are down, some
//! pairs simply have no path and callers treat that as infinitely cold.

pub mod astar;

pub use astar::{distance, distance_over, path};

use serde::{Deserialize, Serialize};

/// A shortest-path distance, or the absence of any path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Distance {
    /// Shortest path length in steps.
    Steps(u32),
    /// No path exists under the current obstacle set.
    Unreachable,
}

impl Distance {
    /// The step count, or `None` when unreachable.
    #[must_use]
    pub fn steps(self) -> Option<u32> {
        match self {
            Distance::Steps(n) => Some(n),
            Distance::Unreachable => None,
        }
    }

    /// Whether no path exists.
    #[must_use]
    pub fn is_unreachable(self) -> bool {
        matches!(self, Distance::Unreachable)
    }

    /// Whether the distance is strictly greater than `limit` steps.
    /// Unreachable counts as greater than any limit.
    #[must_use]
    pub fn exceeds(self, limit: u32) -> bool {
        match self {
            Distance::Steps(n) => n > limit,
            Distance::Unreachable => true,
        }
    }

    /// Whether the distance is at most `limit` steps.
    #[must_use]
    pub fn at_most(self, limit: u32) -> bool {
        !self.exceeds(limit)
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use std::cmp::Ordering;
        match (self, other) {
            (Distance::Steps(a), Distance::Steps(b)) => a.cmp(b),
            (Distance::Steps(_), Distance::Unreachable) => Ordering::Less,
            (Distance::Unreachable, Distance::Steps(_)) => Ordering::Greater,
            (Distance::Unreachable, Distance::Unreachable) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Distance::Steps(n) => write!(f, "{n}"),
            Distance::Unreachable => write!(f, "unreachable"),
        }
    }
}
