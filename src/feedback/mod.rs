//! Proximity feedback: bucketed temperature signal shown to a seeker.
//!
//! Recomputed whenever the seeker's position or the target's position
//! changes. The presentation layer maps each bucket to an image; the
//! engine only ever deals in the bucket itself.

use serde::{Deserialize, Serialize};

use crate::path::Distance;

/// Coarse proximity signal derived from shortest-path distance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedbackBucket {
    Found,
    Burning,
    Hot,
    Warm,
    Cool,
    Cold,
}

/// Map a distance to its feedback bucket.
///
/// Unreachable reads as infinitely cold.
#[must_use]
pub fn bucket(distance: Distance) -> FeedbackBucket {
    match distance {
        Distance::Steps(0) => FeedbackBucket::Found,
        Distance::Steps(1..=2) => FeedbackBucket::Burning,
        Distance::Steps(3..=4) => FeedbackBucket::Hot,
        Distance::Steps(5..=6) => FeedbackBucket::Warm,
        Distance::Steps(7..=10) => FeedbackBucket::Cool,
        Distance::Steps(_) | Distance::Unreachable => FeedbackBucket::Cold,
    }
}
