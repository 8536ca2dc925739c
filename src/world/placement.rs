//! Obstacle placement validation.
//!
//! Validation is pure: `check` never mutates anything, and `place`
//! commits only after the full check passes, so a rejected placement
//! leaves the world bit-for-bit unchanged. The AI probes many candidate
//! placements per decision through the same `check`.

use thiserror::Error;

use super::grid::GridWorld;
use super::obstacle::{footprint, Obstacle};
use crate::core::{AgentId, AgentPair, AgentState, Cell, Orientation};

/// Why a placement was rejected. Informational; the turn machine
/// flattens every variant to an invalid-action result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("obstacle cell {0} is off the board")]
    OutOfBounds(Cell),
    #[error("obstacle cell {0} is already blocked")]
    AlreadyBlocked(Cell),
    #[error("obstacle cell {0} is occupied by an agent")]
    OnAgent(Cell),
    #[error("obstacle cell {0} is a hiding spot")]
    OnHidingSpot(Cell),
    #[error("obstacle cell {0} holds the collectible")]
    OnCollectible(Cell),
    #[error("placement would seal off the hiding spot at {0}")]
    SealsHidingSpot(Cell),
    #[error("no obstacle placements remaining this round")]
    NoAllowance,
}

/// Validate a placement without committing it.
pub fn check(
    world: &GridWorld,
    agent_positions: [Cell; 2],
    anchor: Cell,
    orientation: Orientation,
) -> Result<(), PlacementError> {
    let cells = footprint(anchor, orientation);

    for cell in cells {
        if !world.in_bounds(cell) {
            return Err(PlacementError::OutOfBounds(cell));
        }
    }
    for cell in cells {
        if world.is_blocked(cell) {
            return Err(PlacementError::AlreadyBlocked(cell));
        }
    }
    for cell in cells {
        if agent_positions.contains(&cell) {
            return Err(PlacementError::OnAgent(cell));
        }
    }
    for cell in cells {
        if world.is_hiding_spot(cell) {
            return Err(PlacementError::OnHidingSpot(cell));
        }
        if world.collectible() == Some(cell) {
            return Err(PlacementError::OnCollectible(cell));
        }
    }

    // A corner hiding spot has exactly two orthogonal neighbors; if this
    // placement together with committed obstacles would block both, the
    // target could become unreachable there.
    let overlay = world.blocked_with(cells);
    for &spot in world.hiding_spots() {
        if !world.is_corner(spot) {
            continue;
        }
        let sealed = spot
            .neighbors()
            .into_iter()
            .filter(|&n| world.in_bounds(n))
            .all(|n| overlay.contains(&n));
        if sealed {
            return Err(PlacementError::SealsHidingSpot(spot));
        }
    }

    Ok(())
}

/// Whether a placement would be accepted.
#[must_use]
pub fn can_place(
    world: &GridWorld,
    agent_positions: [Cell; 2],
    anchor: Cell,
    orientation: Orientation,
) -> bool {
    check(world, agent_positions, anchor, orientation).is_ok()
}

/// Validate and commit a placement, spending one of the owner's
/// obstacle allowances. On error nothing changes.
pub fn place(
    world: &mut GridWorld,
    agents: &mut AgentPair<AgentState>,
    owner: AgentId,
    anchor: Cell,
    orientation: Orientation,
) -> Result<(), PlacementError> {
    if agents[owner].obstacles_remaining == 0 {
        return Err(PlacementError::NoAllowance);
    }

    let positions = [agents[AgentId::One].pos, agents[AgentId::Two].pos];
    check(world, positions, anchor, orientation)?;

    world.commit_obstacle(Obstacle::new(anchor, orientation, owner));
    agents[owner].obstacles_remaining -= 1;
    Ok(())
}
