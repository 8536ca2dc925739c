//! Core engine types: cells, agents, actions, RNG, configuration.
//!
//! These are the building blocks shared by the world, pathfinding, turn
//! and AI modules.

pub mod action;
pub mod agent;
pub mod cell;
pub mod config;
pub mod rng;

pub use action::{Action, ActionRecord, TurnResult};
pub use agent::{AgentId, AgentPair, AgentState, FreezeState};
pub use cell::{Cell, Direction, Orientation};
pub use config::{Difficulty, GameMode, RoundConfig, HIDING_SPOTS_MAX, HIDING_SPOTS_MIN};
pub use rng::{GameRng, GameRngState};
