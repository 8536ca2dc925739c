//! # gridseek
//!
//! Decision engine for a two-player hide-and-seek game on a square grid.
//! Both agents race to reach a hidden target cell; the board tells them
//! only how close they are, never where the target is.
//!
//! ## Design Principles
//!
//! 1. **Deterministic Core**: Every run is reproducible from a single
//!    seed. All randomness flows through `GameRng`; there is no ambient
//!    entropy and no wall-clock dependence.
//!
//! 2. **Rejected Means Untouched**: An invalid action returns
//!    `TurnResult::Invalid` and leaves the round bit-for-bit unchanged,
//!    including the RNG stream. Callers can probe legality by submitting.
//!
//! 3. **Cheap Hypotheticals**: The obstacle mask is a persistent set
//!    (`im-rs`), so the opponent policy scores candidate placements on
//!    O(1) overlays instead of mutating and undoing shared state.
//!
//! ## Modules
//!
//! - `core`: Cells, directions, agents, RNG, actions, configuration
//! - `world`: Grid state, obstacles, and placement validation
//! - `path`: A* shortest paths and the `Distance` domain
//! - `feedback`: Proximity buckets derived from path distance
//! - `round`: Round lifecycle and the turn state machine
//! - `ai`: Opponent decision policy for the computer-controlled seeker
//! - `session`: Rounds, scores, and the interface the UI talks to

pub mod core;
pub mod world;
pub mod path;
pub mod feedback;
pub mod round;
pub mod ai;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, AgentId, AgentPair, AgentState, Cell, Difficulty, Direction,
    FreezeState, GameMode, GameRng, GameRngState, Orientation, RoundConfig, TurnResult,
};

pub use crate::world::{GridWorld, Obstacle, PlacementError};

pub use crate::path::Distance;

pub use crate::feedback::FeedbackBucket;

pub use crate::round::{Round, RoundBuilder, TurnState};

pub use crate::ai::{OpponentPolicy, PolicyParams};

pub use crate::session::Session;
