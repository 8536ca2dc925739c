//! Round configuration: grid size, difficulty, game mode.
//!
//! Difficulty only tunes the opponent policy's obstacle constants; the
//! control flow is identical on both tiers.

use serde::{Deserialize, Serialize};

/// Opponent difficulty tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Normal,
    Hard,
}

/// Who drives the second seeker. Keys the cumulative score table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    PlayerVsPlayer,
    PlayerVsComputer,
}

/// Fewest hiding spots generated at round start.
pub const HIDING_SPOTS_MIN: usize = 8;
/// Most hiding spots generated at round start.
pub const HIDING_SPOTS_MAX: usize = 12;

/// Shape of a round: board size, difficulty tier, game mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Board side length (8 or 10 in the shipped modes).
    pub grid_size: i16,
    /// Opponent difficulty tier.
    pub difficulty: Difficulty,
    /// Game mode.
    pub mode: GameMode,
    /// Whether a freeze collectible spawns.
    pub collectible: bool,
}

impl RoundConfig {
    /// Create a config. Panics on board sizes the game never uses.
    #[must_use]
    pub fn new(grid_size: i16, difficulty: Difficulty, mode: GameMode) -> Self {
        assert!((4..=16).contains(&grid_size), "Grid size must be 4-16");
        Self {
            grid_size,
            difficulty,
            mode,
            collectible: true,
        }
    }

    /// Disable the freeze collectible.
    #[must_use]
    pub fn without_collectible(mut self) -> Self {
        self.collectible = false;
        self
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self::new(8, Difficulty::Normal, GameMode::PlayerVsComputer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RoundConfig::default();
        assert_eq!(config.grid_size, 8);
        assert_eq!(config.difficulty, Difficulty::Normal);
        assert!(config.collectible);
    }

    #[test]
    fn test_without_collectible() {
        let config = RoundConfig::default().without_collectible();
        assert!(!config.collectible);
    }

    #[test]
    #[should_panic(expected = "Grid size must be 4-16")]
    fn test_rejects_tiny_grid() {
        let _ = RoundConfig::new(2, Difficulty::Normal, GameMode::PlayerVsPlayer);
    }
}
