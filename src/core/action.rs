//! Actions and turn outcomes.
//!
//! One action is submitted per turn. The turn state machine validates it
//! against the world and either applies it or reports `Invalid` without
//! touching any state.

use serde::{Deserialize, Serialize};

use super::agent::AgentId;
use super::cell::{Cell, Direction, Orientation};

/// A single turn's action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Step one cell in a direction.
    Move(Direction),
    /// Place a two-cell obstacle segment.
    PlaceObstacle { anchor: Cell, orientation: Orientation },
    /// Move the hidden target to a new hiding spot (once per round).
    RelocateTarget,
    /// Pass the turn. Recorded for frozen skips and used by a fully
    /// enclosed agent that cannot move.
    Wait,
}

/// Tagged outcome of one submitted action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnResult {
    /// The round goes on; the other agent is up.
    Continue,
    /// The acting agent stepped onto the hidden target and wins the round.
    TargetFound(AgentId),
    /// The action was illegal. State is unchanged and the turn is not
    /// consumed; the caller may retry.
    Invalid,
}

impl TurnResult {
    /// Whether the action was accepted.
    #[must_use]
    pub fn is_accepted(self) -> bool {
        !matches!(self, TurnResult::Invalid)
    }
}

/// A recorded action with metadata, for replay and debugging.
///
/// Frozen skips are recorded as `Wait` entries even though no action was
/// submitted for them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The agent the entry belongs to.
    pub agent: AgentId,
    /// The action taken (or `Wait` for a frozen skip).
    pub action: Action,
    /// Position in the round's action sequence.
    pub ply: u32,
}
