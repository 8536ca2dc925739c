//! The computer-controlled seeker's decision policy.
//!
//! `decide` is invoked once when it becomes the computer's turn and
//! returns exactly one action. Rules are evaluated in fixed priority
//! order and the first applicable rule fires:
//!
//! 1. Relocate the target when self is far from it and the opponent is
//!    closing in.
//! 2. Pursue the freeze collectible when it is on the way or the race
//!    for the target is tight.
//! 3. Place an obstacle that lengthens the opponent's path more than
//!    the mover's own.
//! 4. Step toward the target.
//!
//! Placement probing never mutates the round: candidates are scored
//! against O(1) clones of the obstacle mask, so an early return can
//! never leave a phantom obstacle committed.

use smallvec::SmallVec;

use crate::core::{Action, AgentId, Cell, Direction, GameRng, Orientation};
use crate::path::{self, Distance};
use crate::round::Round;
use crate::world::{footprint, placement};

use super::params::{
    PolicyParams, BLOCK_CONSIDER_MARGIN, FALLBACK_THRESHOLD, FREEZE_RACE_MARGIN, PROXIMITY_BONUS,
    PROXIMITY_BONUS_RANGE, RELOCATE_OPP_NEAR, RELOCATE_SELF_FAR,
};

/// Decision policy for a computer-controlled seeker.
#[derive(Clone, Debug)]
pub struct OpponentPolicy {
    params: PolicyParams,
    rng: GameRng,
}

impl OpponentPolicy {
    /// Create a policy with the given tuning and RNG stream.
    #[must_use]
    pub fn new(params: PolicyParams, rng: GameRng) -> Self {
        Self { params, rng }
    }

    /// The active tuning constants.
    #[must_use]
    pub fn params(&self) -> &PolicyParams {
        &self.params
    }

    /// Choose one action for `agent` given the current round state.
    pub fn decide(&mut self, round: &Round, agent: AgentId) -> Action {
        let world = round.world();
        let target = round.target();
        let me = &round.agents()[agent];
        let opp = &round.agents()[agent.other()];

        let d_me = path::distance(world, me.pos, target);
        let d_opp = path::distance(world, opp.pos, target);

        // 1. Relocate reflex.
        if !me.relocate_used && d_me.exceeds(RELOCATE_SELF_FAR) && d_opp.at_most(RELOCATE_OPP_NEAR)
        {
            return Action::RelocateTarget;
        }

        // 2. Collectible pursuit.
        if let Some(step) = self.collectible_step(round, agent, d_me, d_opp) {
            return step;
        }

        // 3. Obstacle placement.
        if me.obstacles_remaining > 0 && blocking_worthwhile(d_me, d_opp) {
            if let Some((anchor, orientation)) = self.best_placement(round, agent, d_me, d_opp) {
                if self.rng.gen_bool(self.params.commit_probability) {
                    return Action::PlaceObstacle {
                        anchor,
                        orientation,
                    };
                }
            }
        }

        // 4. Movement.
        self.movement(round, agent, d_me)
    }

    fn collectible_step(
        &mut self,
        round: &Round,
        agent: AgentId,
        d_me: Distance,
        d_opp: Distance,
    ) -> Option<Action> {
        let world = round.world();
        let collectible = world.collectible()?;
        let me = &round.agents()[agent];

        let on_my_path = path::path(world, me.pos, round.target()).contains(&collectible);
        let opp_frozen = round.agents()[agent.other()].freeze.is_frozen();
        let tight_race = match (d_me.steps(), d_opp.steps()) {
            (Some(mine), Some(theirs)) => {
                !opp_frozen && theirs <= mine && mine - theirs <= FREEZE_RACE_MARGIN
            }
            _ => false,
        };
        if !on_my_path && !tight_race {
            return None;
        }

        let to_collectible = path::path(world, me.pos, collectible);
        let next = *to_collectible.get(1)?;
        Direction::between(me.pos, next).map(Action::Move)
    }

    /// Highest-scoring legal placement, probing in three stages: the
    /// whole board at the configured threshold, then the opponent's
    /// likely path, then cells adjacent to the opponent.
    fn best_placement(
        &self,
        round: &Round,
        agent: AgentId,
        d_me: Distance,
        d_opp: Distance,
    ) -> Option<(Cell, Orientation)> {
        let world = round.world();
        let opp_pos = round.agents()[agent.other()].pos;

        let size = world.size();
        let everywhere: Vec<Cell> = (0..size)
            .flat_map(|row| (0..size).map(move |col| Cell::new(row, col)))
            .collect();
        if let Some(hit) =
            self.probe(round, agent, &everywhere, d_me, d_opp, self.params.impact_threshold)
        {
            return Some(hit);
        }

        let opp_path = path::path(world, opp_pos, round.target());
        if let Some(hit) = self.probe(round, agent, &opp_path, d_me, d_opp, FALLBACK_THRESHOLD) {
            return Some(hit);
        }

        let adjacent: Vec<Cell> = opp_pos.neighbors().to_vec();
        self.probe(round, agent, &adjacent, d_me, d_opp, FALLBACK_THRESHOLD)
    }

    /// Score candidate anchors against overlay masks and return the
    /// best placement clearing `min_score`. Ties keep the first
    /// candidate in scan order, so probing is deterministic.
    fn probe(
        &self,
        round: &Round,
        agent: AgentId,
        anchors: &[Cell],
        d_me: Distance,
        d_opp: Distance,
        min_score: i64,
    ) -> Option<(Cell, Orientation)> {
        let world = round.world();
        let target = round.target();
        let me_pos = round.agents()[agent].pos;
        let opp_pos = round.agents()[agent.other()].pos;
        let positions = [
            round.agents()[AgentId::One].pos,
            round.agents()[AgentId::Two].pos,
        ];

        // Effective distance for scoring; an unreachable opponent is
        // "worth" a full board crossing.
        let worst = i64::from(world.size()) * i64::from(world.size());
        let eff = |d: Distance| d.steps().map_or(worst, i64::from);
        let old_me = eff(d_me);
        let old_opp = eff(d_opp);

        let mut best: Option<(i64, Cell, Orientation)> = None;
        for &anchor in anchors {
            for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                if !placement::can_place(world, positions, anchor, orientation) {
                    continue;
                }

                let overlay = world.blocked_with(footprint(anchor, orientation));
                let new_me = path::distance_over(&overlay, world.size(), me_pos, target);
                // Never wall ourselves off from the target.
                if new_me.is_unreachable() {
                    continue;
                }
                let new_opp = path::distance_over(&overlay, world.size(), opp_pos, target);

                let mut score = 2 * (eff(new_opp) - old_opp) - (eff(new_me) - old_me);
                if self.params.target_proximity_bonus
                    && anchor.manhattan(target) <= PROXIMITY_BONUS_RANGE
                {
                    score += PROXIMITY_BONUS;
                }

                if score >= min_score && best.map_or(true, |(s, _, _)| score > s) {
                    best = Some((score, anchor, orientation));
                }
            }
        }

        best.map(|(_, anchor, orientation)| (anchor, orientation))
    }

    fn movement(&mut self, round: &Round, agent: AgentId, d_me: Distance) -> Action {
        let world = round.world();
        let target = round.target();
        let me = &round.agents()[agent];

        let mut legal: SmallVec<[(Cell, Distance); 4]> = SmallVec::new();
        for neighbor in me.pos.neighbors() {
            if world.in_bounds(neighbor) && !world.is_blocked(neighbor) {
                legal.push((neighbor, path::distance(world, neighbor, target)));
            }
        }
        let Some(best) = legal.iter().map(|&(_, d)| d).min() else {
            // Fully enclosed; stay put.
            return Action::Wait;
        };

        let choice = if best < d_me {
            // Strict improvement: uniform among the best.
            let winners: SmallVec<[Cell; 4]> = legal
                .iter()
                .filter(|&&(_, d)| d == best)
                .map(|&(cell, _)| cell)
                .collect();
            self.rng.choose(&winners).copied().unwrap_or(winners[0])
        } else if let Some(&(cell, _)) = legal
            .iter()
            .find(|&&(cell, d)| d == d_me && Some(cell) != me.last_pos)
        {
            // No improvement: hold distance without bouncing back to
            // the cell just vacated.
            cell
        } else if let Some(&(cell, _)) = legal.iter().find(|&&(_, d)| d == d_me) {
            cell
        } else {
            legal[0].0
        };

        match Direction::between(me.pos, choice) {
            Some(direction) => Action::Move(direction),
            None => Action::Wait,
        }
    }
}

fn blocking_worthwhile(d_me: Distance, d_opp: Distance) -> bool {
    match (d_me.steps(), d_opp.steps()) {
        // Opponent ahead, or within the consideration margin behind us.
        (Some(mine), Some(theirs)) => i64::from(theirs) < i64::from(mine) + BLOCK_CONSIDER_MARGIN,
        // We are cut off; slowing the opponent is all that's left.
        (None, Some(_)) => true,
        _ => false,
    }
}
