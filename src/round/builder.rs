//! Deterministic round construction.
//!
//! `Round::start` randomizes the layout. The builder pins any part of
//! it — hiding spots, target, collectible, agent positions — for
//! reproducible tests and scripted demos, while unset parts keep their
//! round-start defaults.

use crate::core::{AgentId, AgentPair, AgentState, Cell, GameRng, RoundConfig};
use crate::world::GridWorld;

use super::state::{Round, TurnState};

/// Builder for a round with a pinned layout.
pub struct RoundBuilder {
    config: RoundConfig,
    seed: u64,
    hiding_spots: Option<Vec<Cell>>,
    target: Option<Cell>,
    collectible: Option<Cell>,
    agent_positions: Option<(Cell, Cell)>,
}

impl RoundBuilder {
    /// Start building a round with the given config.
    #[must_use]
    pub fn new(config: RoundConfig) -> Self {
        Self {
            config,
            seed: 0,
            hiding_spots: None,
            target: None,
            collectible: None,
            agent_positions: None,
        }
    }

    /// Seed for the round's RNG stream (relocation draws, etc).
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Pin the hiding-spot set.
    #[must_use]
    pub fn hiding_spots(mut self, spots: Vec<Cell>) -> Self {
        self.hiding_spots = Some(spots);
        self
    }

    /// Pin the hidden target. Must be one of the hiding spots.
    #[must_use]
    pub fn target(mut self, target: Cell) -> Self {
        self.target = Some(target);
        self
    }

    /// Pin the collectible's position.
    #[must_use]
    pub fn collectible(mut self, cell: Cell) -> Self {
        self.collectible = Some(cell);
        self
    }

    /// Pin both agents' starting cells.
    #[must_use]
    pub fn agent_positions(mut self, one: Cell, two: Cell) -> Self {
        self.agent_positions = Some((one, two));
        self
    }

    /// Build the round. Panics on layouts the game itself could never
    /// produce (a target that is not a hiding spot, out-of-bounds
    /// positions).
    #[must_use]
    pub fn build(self) -> Round {
        let rng = GameRng::new(self.seed);

        // Nothing pinned: plain randomized start.
        if self.hiding_spots.is_none() && self.target.is_none() {
            let mut round = Round::start(self.config, rng);
            if let Some((one, two)) = self.agent_positions {
                round.agents[AgentId::One].pos = one;
                round.agents[AgentId::Two].pos = two;
            }
            return round;
        }

        let size = self.config.grid_size;
        let spots = self.hiding_spots.unwrap_or_default();
        let target = self.target.expect("pinned layouts require a target");
        assert!(spots.contains(&target), "target must be a hiding spot");

        let (one, two) = self
            .agent_positions
            .unwrap_or((Cell::new(0, 0), Cell::new(size - 1, size - 1)));
        for pos in [one, two, target] {
            assert!(
                (0..size).contains(&pos.row) && (0..size).contains(&pos.col),
                "layout cell {pos} is off the board"
            );
        }

        let mut world = GridWorld::new(size);
        world.set_hiding_spots(spots);
        if let Some(cell) = self.collectible {
            assert!(world.is_hiding_spot(cell), "collectible must be a hiding spot");
            assert_ne!(cell, target, "collectible cannot share the target's cell");
            world.set_collectible(Some(cell));
        }

        Round {
            config: self.config,
            world,
            agents: AgentPair::new(AgentState::at(one), AgentState::at(two)),
            target,
            turn: TurnState::Awaiting(AgentId::One),
            feedback: AgentPair::new(None, None),
            history: Vec::new(),
            ply: 0,
            rng,
        }
    }
}
