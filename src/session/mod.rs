//! Session layer: what the presentation code talks to.
//!
//! A session owns the current round, the opponent policy in
//! player-vs-computer mode, and the cumulative score table. Scores
//! accumulate when a round ends and reset when the player returns to
//! the menu; nothing is persisted beyond this in-memory table.

use rustc_hash::FxHashMap;

use crate::ai::{OpponentPolicy, PolicyParams};
use crate::core::{
    Action, AgentId, Cell, Difficulty, GameMode, GameRng, RoundConfig, TurnResult,
};
use crate::feedback::FeedbackBucket;
use crate::path::Distance;
use crate::round::Round;

/// A running game session across rounds.
#[derive(Clone, Debug)]
pub struct Session {
    grid_size: i16,
    difficulty: Difficulty,
    mode: GameMode,
    rng: GameRng,
    scores: FxHashMap<(AgentId, GameMode), u32>,
    round: Option<Round>,
    policy: OpponentPolicy,
}

impl Session {
    /// Create a session. All randomness across its rounds derives from
    /// `seed`.
    #[must_use]
    pub fn new(grid_size: i16, difficulty: Difficulty, mode: GameMode, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let policy = OpponentPolicy::new(PolicyParams::for_difficulty(difficulty), rng.fork());
        Self {
            grid_size,
            difficulty,
            mode,
            rng,
            scores: FxHashMap::default(),
            round: None,
            policy,
        }
    }

    /// Start a fresh round, replacing any previous one.
    pub fn start_round(&mut self) -> &Round {
        let config = RoundConfig::new(self.grid_size, self.difficulty, self.mode);
        let round_rng = self.rng.fork();
        self.round.insert(Round::start(config, round_rng))
    }

    /// The current round, if one has been started.
    #[must_use]
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Submit an action for an agent. Accumulates the winner's score
    /// when the round ends.
    pub fn submit(&mut self, agent: AgentId, action: Action) -> TurnResult {
        let Some(round) = self.round.as_mut() else {
            return TurnResult::Invalid;
        };
        let result = round.submit(agent, action);
        if let TurnResult::TargetFound(winner) = result {
            *self.scores.entry((winner, self.mode)).or_insert(0) += 1;
        }
        result
    }

    /// Run the opponent policy if it is the computer's turn.
    ///
    /// Returns the chosen action and its result, or `None` when there
    /// is nothing for the computer to do (wrong mode, round over, or
    /// not its turn). The caller inserts its own thinking delay; the
    /// engine never waits on wall-clock time.
    pub fn computer_turn(&mut self) -> Option<(Action, TurnResult)> {
        if self.mode != GameMode::PlayerVsComputer {
            return None;
        }
        let round = self.round.as_ref()?;
        if round.active_agent() != Some(AgentId::Two) {
            return None;
        }

        let action = self.policy.decide(round, AgentId::Two);
        let result = self.submit(AgentId::Two, action);
        Some((action, result))
    }

    /// The agent's proximity feedback in the current round.
    #[must_use]
    pub fn query_feedback(&self, agent: AgentId) -> Option<FeedbackBucket> {
        self.round.as_ref()?.feedback(agent)
    }

    /// Shortest-path distance between two cells in the current round,
    /// for on-screen readouts.
    #[must_use]
    pub fn query_distance(&self, a: Cell, b: Cell) -> Distance {
        match &self.round {
            Some(round) => round.distance_between(a, b),
            None => Distance::Unreachable,
        }
    }

    /// Rounds won by the agent in this session's mode.
    #[must_use]
    pub fn score(&self, agent: AgentId) -> u32 {
        self.scores.get(&(agent, self.mode)).copied().unwrap_or(0)
    }

    /// The return-to-menu contract: wipe cumulative scores.
    pub fn reset_scores(&mut self) {
        self.scores.clear();
    }
}
