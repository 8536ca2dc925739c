//! The turn state machine: one submitted action per turn.
//!
//! `Round::submit` is the only mutation entry point for a live round.
//! Every invalid input is a recoverable no-op: state is untouched, the
//! turn is not consumed, and the caller may retry. There is no fatal
//! error path inside the engine.
//!
//! Turn handover runs the freeze transition for the incoming agent, so a
//! frozen seeker's turns are skipped by the engine itself without
//! consuming a submitted action.

use crate::core::{Action, AgentId, Cell, Direction, FreezeState, Orientation, TurnResult};
use crate::feedback::FeedbackBucket;
use crate::world::placement;

use super::state::{Round, TurnState};

impl Round {
    /// Submit one action for `agent`.
    ///
    /// Rejects with `TurnResult::Invalid` when the round is over, when
    /// it is not `agent`'s turn, or when the action itself is illegal.
    pub fn submit(&mut self, agent: AgentId, action: Action) -> TurnResult {
        let TurnState::Awaiting(active) = self.turn else {
            return TurnResult::Invalid;
        };
        if agent != active {
            return TurnResult::Invalid;
        }

        match action {
            Action::Move(direction) => self.apply_move(agent, direction),
            Action::PlaceObstacle {
                anchor,
                orientation,
            } => self.apply_place(agent, anchor, orientation),
            Action::RelocateTarget => self.apply_relocate(agent),
            Action::Wait => {
                self.record(agent, Action::Wait);
                self.end_turn(agent);
                TurnResult::Continue
            }
        }
    }

    fn apply_move(&mut self, agent: AgentId, direction: Direction) -> TurnResult {
        let from = self.agents[agent].pos;
        let dest = from.step(direction);
        if !self.world.in_bounds(dest) || self.world.is_blocked(dest) {
            return TurnResult::Invalid;
        }

        self.agents[agent].last_pos = Some(from);
        self.agents[agent].pos = dest;

        // Pickup resolves atomically with the move, before the target
        // check: the *other* agent is frozen for its next two turns.
        if self.world.take_collectible(dest) {
            self.agents[agent.other()].freeze = FreezeState::Frozen(2);
        }

        self.record(agent, Action::Move(direction));

        if dest == self.target {
            self.feedback[agent] = Some(FeedbackBucket::Found);
            self.turn = TurnState::Over(agent);
            return TurnResult::TargetFound(agent);
        }

        self.recompute_feedback(agent);
        self.end_turn(agent);
        TurnResult::Continue
    }

    fn apply_place(&mut self, agent: AgentId, anchor: Cell, orientation: Orientation) -> TurnResult {
        match placement::place(&mut self.world, &mut self.agents, agent, anchor, orientation) {
            Ok(()) => {
                self.record(agent, Action::PlaceObstacle { anchor, orientation });
                self.end_turn(agent);
                TurnResult::Continue
            }
            Err(_) => TurnResult::Invalid,
        }
    }

    fn apply_relocate(&mut self, agent: AgentId) -> TurnResult {
        if self.agents[agent].relocate_used {
            return TurnResult::Invalid;
        }

        let positions = [self.agents[AgentId::One].pos, self.agents[AgentId::Two].pos];
        let target = self.target;

        let mut candidates: Vec<Cell> = self
            .world
            .hiding_spots()
            .iter()
            .copied()
            .filter(|&cell| cell != target && !positions.contains(&cell))
            .collect();
        if candidates.is_empty() {
            // Every other spot is under an agent; allow the target to
            // stay where it is rather than fail the action.
            candidates = self
                .world
                .hiding_spots()
                .iter()
                .copied()
                .filter(|cell| !positions.contains(cell))
                .collect();
        }
        let Some(&new_target) = self.rng.choose(&candidates) else {
            return TurnResult::Invalid;
        };

        self.target = new_target;
        self.agents[agent].relocate_used = true;

        // The target moved: both seekers' signals are stale.
        self.recompute_feedback(agent);
        self.recompute_feedback(agent.other());

        self.record(agent, Action::RelocateTarget);
        self.end_turn(agent);
        TurnResult::Continue
    }

    /// Hand the turn to the other agent, skipping frozen turns.
    fn end_turn(&mut self, from: AgentId) {
        let mut next = from.other();
        while self.agents[next].freeze.begin_turn() {
            self.record(next, Action::Wait);
            next = next.other();
        }
        self.turn = TurnState::Awaiting(next);
    }

    fn record(&mut self, agent: AgentId, action: Action) {
        let ply = self.ply;
        self.history.push(crate::core::ActionRecord { agent, action, ply });
        self.ply += 1;
    }
}
