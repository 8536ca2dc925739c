//! Agents and per-agent state.
//!
//! Everything here is symmetric between the two agents; which one is
//! human-controlled is a session concern, not an engine one. `AgentPair`
//! mirrors the board's two-sidedness so per-agent data never ends up in
//! loose parallel fields.

use serde::{Deserialize, Serialize};

use super::cell::Cell;

/// One of the two agents in a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentId {
    One,
    Two,
}

impl AgentId {
    /// Both agents, in seating order. Agent One always opens the round.
    pub const BOTH: [AgentId; 2] = [AgentId::One, AgentId::Two];

    /// The other agent.
    #[must_use]
    pub fn other(self) -> AgentId {
        match self {
            AgentId::One => AgentId::Two,
            AgentId::Two => AgentId::One,
        }
    }

    /// Zero-based index for array storage.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            AgentId::One => 0,
            AgentId::Two => 1,
        }
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentId::One => write!(f, "agent 1"),
            AgentId::Two => write!(f, "agent 2"),
        }
    }
}

/// A value per agent, indexable by `AgentId`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentPair<T> {
    data: [T; 2],
}

impl<T> AgentPair<T> {
    /// Build from Agent One's and Agent Two's values.
    #[must_use]
    pub fn new(one: T, two: T) -> Self {
        Self { data: [one, two] }
    }

    /// Build by calling `f` for each agent.
    #[must_use]
    pub fn from_fn(mut f: impl FnMut(AgentId) -> T) -> Self {
        Self {
            data: [f(AgentId::One), f(AgentId::Two)],
        }
    }

    /// Iterate `(agent, value)` in seating order.
    pub fn iter(&self) -> impl Iterator<Item = (AgentId, &T)> {
        AgentId::BOTH.into_iter().zip(self.data.iter())
    }
}

impl<T> std::ops::Index<AgentId> for AgentPair<T> {
    type Output = T;

    fn index(&self, agent: AgentId) -> &T {
        &self.data[agent.index()]
    }
}

impl<T> std::ops::IndexMut<AgentId> for AgentPair<T> {
    fn index_mut(&mut self, agent: AgentId) -> &mut T {
        &mut self.data[agent.index()]
    }
}

/// Freeze progression for one agent.
///
/// An agent frozen for N turns loses N of its turns, then needs one
/// explicit `Unfreezing` transition before it is active again. The
/// single transition point is `begin_turn`; nothing else may change
/// this state, so a freeze picked up mid-turn never costs the frozen
/// agent a partial turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FreezeState {
    /// Acting normally.
    Active,
    /// Losing this many upcoming turns.
    Frozen(u8),
    /// Final frozen turn served; next `begin_turn` restores `Active`.
    Unfreezing,
}

impl FreezeState {
    /// Advance the state at the start of the agent's turn. Returns
    /// `true` when the turn must be skipped.
    pub fn begin_turn(&mut self) -> bool {
        match *self {
            FreezeState::Active => false,
            FreezeState::Unfreezing => {
                *self = FreezeState::Active;
                false
            }
            FreezeState::Frozen(turns) => {
                *self = if turns <= 1 {
                    FreezeState::Unfreezing
                } else {
                    FreezeState::Frozen(turns - 1)
                };
                true
            }
        }
    }

    /// Whether the agent is currently losing turns.
    #[must_use]
    pub fn is_frozen(self) -> bool {
        matches!(self, FreezeState::Frozen(_))
    }
}

/// Per-agent round state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentState {
    /// Current position.
    pub pos: Cell,
    /// Position before the most recent move, for backtrack avoidance.
    pub last_pos: Option<Cell>,
    /// Obstacle placements still available this round.
    pub obstacles_remaining: u8,
    /// Whether this agent already triggered a target relocation.
    pub relocate_used: bool,
    /// Freeze progression.
    pub freeze: FreezeState,
}

impl AgentState {
    /// Fresh round state at a starting position.
    #[must_use]
    pub fn at(pos: Cell) -> Self {
        Self {
            pos,
            last_pos: None,
            obstacles_remaining: 1,
            relocate_used: false,
            freeze: FreezeState::Active,
        }
    }
}
