//! The shared grid world: board geometry, obstacles, placement rules.

pub mod grid;
pub mod obstacle;
pub mod placement;

pub use grid::GridWorld;
pub use obstacle::{footprint, Obstacle};
pub use placement::{can_place, check, place, PlacementError};
