//! Obstacle placement rules exercised through the turn machine.

use gridseek::core::{Action, AgentId, Cell, Direction, Orientation, RoundConfig, TurnResult};
use gridseek::path::Distance;
use gridseek::round::RoundBuilder;

fn config() -> RoundConfig {
    RoundConfig::default().without_collectible()
}

#[test]
fn test_committed_wall_lengthens_paths() {
    let mut round = RoundBuilder::new(config())
        .hiding_spots(vec![Cell::new(4, 4), Cell::new(1, 6)])
        .target(Cell::new(4, 4))
        .build();

    let before = round.distance_between(Cell::new(4, 2), Cell::new(4, 6));
    assert_eq!(before, Distance::Steps(4));

    // Wall covers (4,3) and (5,3), directly across the straight route.
    assert_eq!(
        round.submit(
            AgentId::One,
            Action::PlaceObstacle {
                anchor: Cell::new(4, 3),
                orientation: Orientation::Vertical,
            }
        ),
        TurnResult::Continue
    );

    let after = round.distance_between(Cell::new(4, 2), Cell::new(4, 6));
    assert!(after > before);
    assert_eq!(after, Distance::Steps(6));
}

#[test]
fn test_one_allowance_per_round() {
    let mut round = RoundBuilder::new(config())
        .hiding_spots(vec![Cell::new(4, 4), Cell::new(1, 6)])
        .target(Cell::new(4, 4))
        .build();

    assert_eq!(
        round.submit(
            AgentId::One,
            Action::PlaceObstacle {
                anchor: Cell::new(2, 2),
                orientation: Orientation::Horizontal,
            }
        ),
        TurnResult::Continue
    );
    assert_eq!(round.agents()[AgentId::One].obstacles_remaining, 0);

    round.submit(AgentId::Two, Action::Wait);

    // The allowance is spent; a second, otherwise-legal placement fails
    // and the turn is kept.
    assert_eq!(
        round.submit(
            AgentId::One,
            Action::PlaceObstacle {
                anchor: Cell::new(6, 2),
                orientation: Orientation::Horizontal,
            }
        ),
        TurnResult::Invalid
    );
    assert_eq!(round.active_agent(), Some(AgentId::One));
    assert_eq!(round.world().obstacles().len(), 1);
}

#[test]
fn test_corner_hiding_spot_cannot_be_sealed() {
    // (0,7) is a corner hiding spot with neighbors (0,6) and (1,7).
    let mut round = RoundBuilder::new(config())
        .hiding_spots(vec![Cell::new(0, 7), Cell::new(5, 5)])
        .target(Cell::new(5, 5))
        .build();

    // First wall covers (1,7) and (2,7): legal, one neighbor still open.
    assert_eq!(
        round.submit(
            AgentId::One,
            Action::PlaceObstacle {
                anchor: Cell::new(1, 7),
                orientation: Orientation::Vertical,
            }
        ),
        TurnResult::Continue
    );

    // Second wall would cover (0,6) and close the corner: refused.
    assert_eq!(
        round.submit(
            AgentId::Two,
            Action::PlaceObstacle {
                anchor: Cell::new(0, 5),
                orientation: Orientation::Horizontal,
            }
        ),
        TurnResult::Invalid
    );
    assert_eq!(round.active_agent(), Some(AgentId::Two));

    // The same agent may still spend its allowance elsewhere.
    assert_eq!(
        round.submit(
            AgentId::Two,
            Action::PlaceObstacle {
                anchor: Cell::new(4, 1),
                orientation: Orientation::Horizontal,
            }
        ),
        TurnResult::Continue
    );
}

#[test]
fn test_rejected_placement_is_invisible() {
    let mut round = RoundBuilder::new(config())
        .hiding_spots(vec![Cell::new(4, 4), Cell::new(1, 6)])
        .target(Cell::new(4, 4))
        .build();

    let world_before = serde_json::to_string(round.world()).unwrap();
    let agents_before = *round.agents();

    // Footprint lands on the hiding spot at (4,4).
    assert_eq!(
        round.submit(
            AgentId::One,
            Action::PlaceObstacle {
                anchor: Cell::new(4, 3),
                orientation: Orientation::Horizontal,
            }
        ),
        TurnResult::Invalid
    );

    assert_eq!(serde_json::to_string(round.world()).unwrap(), world_before);
    assert_eq!(*round.agents(), agents_before);
    assert_eq!(round.agents()[AgentId::One].obstacles_remaining, 1);
}

#[test]
fn test_move_into_committed_wall_is_refused() {
    let mut round = RoundBuilder::new(config())
        .hiding_spots(vec![Cell::new(4, 4), Cell::new(1, 6)])
        .target(Cell::new(4, 4))
        .agent_positions(Cell::new(0, 0), Cell::new(0, 2))
        .build();

    // Wall covers (1,1) and (2,1), clear of both agents and spots.
    assert_eq!(
        round.submit(
            AgentId::One,
            Action::PlaceObstacle {
                anchor: Cell::new(1, 1),
                orientation: Orientation::Vertical,
            }
        ),
        TurnResult::Continue
    );

    assert_eq!(
        round.submit(AgentId::Two, Action::Move(Direction::Down)),
        TurnResult::Continue
    );
    // Now at (1,2); stepping left into the wall at (1,1) is refused.
    assert_eq!(
        round.submit(AgentId::One, Action::Wait),
        TurnResult::Continue
    );
    assert_eq!(
        round.submit(AgentId::Two, Action::Move(Direction::Left)),
        TurnResult::Invalid
    );
    assert_eq!(round.agents()[AgentId::Two].pos, Cell::new(1, 2));
}
