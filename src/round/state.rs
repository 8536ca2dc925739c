//! The `Round` aggregate: world, agents, target, turn owner, history.
//!
//! A round is created by `Round::start`, mutated exclusively through
//! `Round::submit` (the turn state machine), and replaced wholesale when
//! a new round begins. Everything a UI needs to render is readable here;
//! nothing is writable from outside.

use serde::{Deserialize, Serialize};

use crate::core::{
    ActionRecord, AgentId, AgentPair, AgentState, Cell, GameRng, RoundConfig, HIDING_SPOTS_MAX,
    HIDING_SPOTS_MIN,
};
use crate::feedback::{self, FeedbackBucket};
use crate::path::{self, Distance};
use crate::world::GridWorld;

/// Whose turn it is, or how the round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    /// Waiting for this agent's action.
    Awaiting(AgentId),
    /// Round over; this agent found the target.
    Over(AgentId),
}

/// One complete play-through from fresh setup to a found target.
#[derive(Clone, Debug)]
pub struct Round {
    pub(crate) config: RoundConfig,
    pub(crate) world: GridWorld,
    pub(crate) agents: AgentPair<AgentState>,
    pub(crate) target: Cell,
    pub(crate) turn: TurnState,
    pub(crate) feedback: AgentPair<Option<FeedbackBucket>>,
    pub(crate) history: Vec<ActionRecord>,
    pub(crate) ply: u32,
    pub(crate) rng: GameRng,
}

impl Round {
    /// Start a fresh round: random hiding spots, random target and
    /// collectible drawn from them, agents at opposite corners, one
    /// obstacle allowance each. Agent One opens.
    #[must_use]
    pub fn start(config: RoundConfig, mut rng: GameRng) -> Self {
        let size = config.grid_size;
        let starts = [Cell::new(0, 0), Cell::new(size - 1, size - 1)];

        let mut world = GridWorld::new(size);
        let spot_count =
            HIDING_SPOTS_MIN + rng.gen_range_usize(0..(HIDING_SPOTS_MAX - HIDING_SPOTS_MIN + 1));
        world.set_hiding_spots(random_distinct_cells(&mut rng, size, spot_count));

        let target = choose_spot(&mut rng, world.hiding_spots(), &starts)
            .unwrap_or(Cell::new(size / 2, size / 2));

        if config.collectible {
            let taken = [starts[0], starts[1], target];
            world.set_collectible(choose_spot(&mut rng, world.hiding_spots(), &taken));
        }

        Self {
            config,
            world,
            agents: AgentPair::new(AgentState::at(starts[0]), AgentState::at(starts[1])),
            target,
            turn: TurnState::Awaiting(AgentId::One),
            feedback: AgentPair::new(None, None),
            history: Vec::new(),
            ply: 0,
            rng,
        }
    }

    /// Round configuration.
    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// The board.
    #[must_use]
    pub fn world(&self) -> &GridWorld {
        &self.world
    }

    /// Both agents' state.
    #[must_use]
    pub fn agents(&self) -> &AgentPair<AgentState> {
        &self.agents
    }

    /// The hidden target's cell. The UI reveals it only at round end.
    #[must_use]
    pub fn target(&self) -> Cell {
        self.target
    }

    /// Current turn state.
    #[must_use]
    pub fn turn(&self) -> TurnState {
        self.turn
    }

    /// The agent whose action is awaited, if the round is live.
    #[must_use]
    pub fn active_agent(&self) -> Option<AgentId> {
        match self.turn {
            TurnState::Awaiting(agent) => Some(agent),
            TurnState::Over(_) => None,
        }
    }

    /// The round winner, if any.
    #[must_use]
    pub fn winner(&self) -> Option<AgentId> {
        match self.turn {
            TurnState::Over(agent) => Some(agent),
            TurnState::Awaiting(_) => None,
        }
    }

    /// Whether the round has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.turn, TurnState::Over(_))
    }

    /// The agent's current proximity feedback. `None` until the agent
    /// first moves (or the target first moves).
    #[must_use]
    pub fn feedback(&self, agent: AgentId) -> Option<FeedbackBucket> {
        self.feedback[agent]
    }

    /// Shortest-path distance between two cells under the current
    /// obstacles, for on-screen distance readouts.
    #[must_use]
    pub fn distance_between(&self, a: Cell, b: Cell) -> Distance {
        path::distance(&self.world, a, b)
    }

    /// Action history, including `Wait` records for frozen skips.
    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    pub(crate) fn recompute_feedback(&mut self, agent: AgentId) {
        let d = path::distance(&self.world, self.agents[agent].pos, self.target);
        self.feedback[agent] = Some(feedback::bucket(d));
    }
}

fn random_distinct_cells(rng: &mut GameRng, size: i16, count: usize) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(count);
    while cells.len() < count {
        let row = rng.gen_range_usize(0..size as usize) as i16;
        let col = rng.gen_range_usize(0..size as usize) as i16;
        let cell = Cell::new(row, col);
        if !cells.contains(&cell) {
            cells.push(cell);
        }
    }
    cells
}

fn choose_spot(rng: &mut GameRng, spots: &[Cell], excluded: &[Cell]) -> Option<Cell> {
    let candidates: Vec<Cell> = spots
        .iter()
        .copied()
        .filter(|cell| !excluded.contains(cell))
        .collect();
    rng.choose(&candidates).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Difficulty, FreezeState, GameMode};

    fn round(seed: u64) -> Round {
        Round::start(RoundConfig::default(), GameRng::new(seed))
    }

    #[test]
    fn test_start_shape() {
        let r = round(42);

        assert_eq!(r.agents()[AgentId::One].pos, Cell::new(0, 0));
        assert_eq!(r.agents()[AgentId::Two].pos, Cell::new(7, 7));
        assert_eq!(r.active_agent(), Some(AgentId::One));
        assert!(!r.is_over());
        assert!(r.world().obstacles().is_empty());
        assert!(r.history().is_empty());

        let spots = r.world().hiding_spots().len();
        assert!((HIDING_SPOTS_MIN..=HIDING_SPOTS_MAX).contains(&spots));
    }

    #[test]
    fn test_target_is_an_eligible_hiding_spot() {
        for seed in 0..20 {
            let r = round(seed);
            assert!(r.world().is_hiding_spot(r.target()));
            assert_ne!(r.target(), r.agents()[AgentId::One].pos);
            assert_ne!(r.target(), r.agents()[AgentId::Two].pos);
        }
    }

    #[test]
    fn test_collectible_distinct_from_target_and_starts() {
        for seed in 0..20 {
            let r = round(seed);
            if let Some(c) = r.world().collectible() {
                assert!(r.world().is_hiding_spot(c));
                assert_ne!(c, r.target());
                assert_ne!(c, r.agents()[AgentId::One].pos);
                assert_ne!(c, r.agents()[AgentId::Two].pos);
            }
        }
    }

    #[test]
    fn test_no_collectible_when_disabled() {
        let config = RoundConfig::default().without_collectible();
        let r = Round::start(config, GameRng::new(42));
        assert_eq!(r.world().collectible(), None);
    }

    #[test]
    fn test_agents_reset_fresh() {
        let r = round(7);
        for (_, agent) in r.agents().iter() {
            assert_eq!(agent.obstacles_remaining, 1);
            assert!(!agent.relocate_used);
            assert_eq!(agent.freeze, FreezeState::Active);
        }
    }

    #[test]
    fn test_same_seed_same_round() {
        let a = round(1234);
        let b = round(1234);

        assert_eq!(a.target(), b.target());
        assert_eq!(a.world().hiding_spots(), b.world().hiding_spots());
        assert_eq!(a.world().collectible(), b.world().collectible());
    }

    #[test]
    fn test_ten_by_ten_mode() {
        let config = RoundConfig::new(10, Difficulty::Hard, GameMode::PlayerVsComputer);
        let r = Round::start(config, GameRng::new(42));
        assert_eq!(r.world().size(), 10);
        assert_eq!(r.agents()[AgentId::Two].pos, Cell::new(9, 9));
    }
}
