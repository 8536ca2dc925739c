//! Round lifecycle and the turn state machine.

pub mod builder;
pub mod state;
pub mod turn;

pub use builder::RoundBuilder;
pub use state::{Round, TurnState};
