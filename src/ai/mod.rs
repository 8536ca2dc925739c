//! Opponent decision policy for the computer-controlled seeker.

pub mod params;
pub mod policy;

pub use params::PolicyParams;
pub use policy::OpponentPolicy;
