//! Tunable constants for the opponent policy.
//!
//! Difficulty changes only these numbers; the decision flow itself is
//! identical on both tiers. The scoring constants are heuristics, not
//! contracts: prefer placements that hurt the opponent more than the
//! mover, and keep the exact weights adjustable.

use serde::{Deserialize, Serialize};

use crate::core::Difficulty;

/// Self-distance beyond which relocating the target becomes attractive.
pub const RELOCATE_SELF_FAR: u32 = 6;
/// Opponent-distance at which the opponent counts as "getting close".
pub const RELOCATE_OPP_NEAR: u32 = 4;
/// Largest lead the opponent may have for a freeze pickup to pay off.
pub const FREEZE_RACE_MARGIN: u32 = 2;
/// How far behind the opponent may be before blocking stops being
/// worth considering.
pub const BLOCK_CONSIDER_MARGIN: i64 = 2;
/// Minimum score for the fallback probe stages.
pub const FALLBACK_THRESHOLD: i64 = 1;
/// Manhattan range around the target that earns the hard-tier bonus.
pub const PROXIMITY_BONUS_RANGE: u32 = 2;
/// Score bonus for near-target placements on the hard tier.
pub const PROXIMITY_BONUS: i64 = 1;

/// Difficulty-dependent constants for obstacle placement.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolicyParams {
    /// Minimum score a full-scan placement must reach before it is
    /// considered at all.
    pub impact_threshold: i64,
    /// Probability that a chosen placement is actually committed, to
    /// avoid deterministic over-blocking.
    pub commit_probability: f64,
    /// Whether near-target placements score a bonus.
    pub target_proximity_bonus: bool,
}

impl PolicyParams {
    /// The shipped constants for a difficulty tier.
    #[must_use]
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Normal => Self {
                impact_threshold: 2,
                commit_probability: 0.5,
                target_proximity_bonus: false,
            },
            Difficulty::Hard => Self {
                impact_threshold: 1,
                commit_probability: 0.9,
                target_proximity_bonus: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hard_blocks_more_eagerly() {
        let normal = PolicyParams::for_difficulty(Difficulty::Normal);
        let hard = PolicyParams::for_difficulty(Difficulty::Hard);

        assert!(hard.impact_threshold < normal.impact_threshold);
        assert!(hard.commit_probability > normal.commit_probability);
        assert!(hard.target_proximity_bonus);
        assert!(!normal.target_proximity_bonus);
    }
}
