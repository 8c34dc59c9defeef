//! End-to-end turns against the offline arena: requests actually land on a
//! board with occupancy, pathing, and resource clamping.

mod common;

use rampart_algo::arena::Arena;
use rampart_algo::constants::OPENING_DEMOLISHER_COUNT;
use rampart_algo::layout::{CORE_TURRETS, CORE_WALLS, FRONT_WALL_REFRESH};
use rampart_algo::{
    GameEngine, Location, PlayerSide, ResourceKind, TurnPlanner, UnitKind,
};

#[test]
fn setup_turn_stands_up_the_core_and_launches_from_the_corner() {
    let mut planner = TurnPlanner::new(common::test_config());
    let mut arena = Arena::new(common::test_config()).with_resources(200.0, 10.0);

    planner.plan_turn(&mut arena).unwrap();

    for cell in CORE_TURRETS.locations {
        let unit = arena.structure_at(*cell).expect("turret placed");
        assert_eq!(unit.kind, UnitKind::Turret);
        assert_eq!(unit.owner, PlayerSide::Ally);
    }
    for cell in CORE_WALLS.locations {
        let unit = arena.structure_at(*cell).expect("wall placed");
        assert_eq!(unit.kind, UnitKind::Wall);
        assert!(unit.upgraded, "wall line gets the upgrade pass");
    }

    // No enemy defences yet, so every open edge cell ties at zero and the
    // first bottom-left cell wins; 10 movement points cover both
    // demolishers at cost 3.
    assert_eq!(
        arena.deployed(),
        &[(
            UnitKind::Demolisher,
            Location::new(13, 0),
            OPENING_DEMOLISHER_COUNT
        )]
    );
}

#[test]
fn reinforcement_turn_refreshes_the_worn_front_walls() {
    let mut planner = TurnPlanner::new(common::test_config());
    let mut arena = Arena::new(common::test_config()).with_resources(500.0, 10.0);

    planner.plan_turn(&mut arena).unwrap();
    arena.set_turn(1);
    planner.plan_turn(&mut arena).unwrap();

    // The refresh cells were part of the perimeter line built this turn and
    // are cleared at the end of it, ready for rebuild next turn.
    assert_eq!(arena.removed(), FRONT_WALL_REFRESH);
    for cell in FRONT_WALL_REFRESH {
        assert!(arena.structure_at(*cell).is_none());
    }
}

#[test]
fn offense_turn_clamps_the_scout_flood_to_the_movement_balance() {
    let mut planner = TurnPlanner::new(common::test_config());
    let mut arena = Arena::new(common::test_config()).with_resources(0.0, 14.0);
    arena.set_turn(3);

    planner.plan_turn(&mut arena).unwrap();

    // Demolishers cost 3: the salvo of 3 spends 9 of 14 points. Scouts
    // cost 1: the oversized request truncates to the remaining 5.
    assert_eq!(
        arena.deployed(),
        &[
            (UnitKind::Demolisher, Location::new(16, 2), 3),
            (UnitKind::Scout, Location::new(15, 1), 5),
        ]
    );
    assert_eq!(arena.resource_balance(ResourceKind::MovementPoints), 0.0);
}
