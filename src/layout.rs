//! Named coordinate tables behind the turn-cycle build intents.
//!
//! The tables are static strategy data, not derived logic; keeping them here
//! leaves the state machine in `planner` free of embedded literals. All
//! coordinates sit in the friendly half of the arena.

use crate::config::UnitKind;
use crate::constants::{OPENING_DEMOLISHER_COUNT, SALVO_DEMOLISHER_COUNT, SCOUT_RUSH_REQUEST};
use crate::location::Location;

/// One placement request the planner issues against the engine: `quantity`
/// units of `unit` at each listed cell, in listed order. Rebuilt every turn
/// from these tables; never persisted.
#[derive(Clone, Copy, Debug)]
pub struct BuildIntent {
    pub unit: UnitKind,
    pub locations: &'static [Location],
    pub quantity: u32,
}

const fn at(x: u8, y: u8) -> Location {
    Location::new(x, y)
}

/// Turrets anchoring the corners and the mid-field funnel.
pub const CORE_TURRETS: BuildIntent = BuildIntent {
    unit: UnitKind::Turret,
    locations: &[at(1, 12), at(26, 12), at(11, 8), at(17, 8)],
    quantity: 1,
};

/// The standing wall line in front of the core turrets. Deliberately leaves
/// gaps at [8,9], [9,9], [13,9]..[15,9] and [19,9] so friendly mobile units
/// keep a route out.
pub const CORE_WALLS: BuildIntent = BuildIntent {
    unit: UnitKind::Wall,
    locations: &[
        at(0, 13),
        at(1, 13),
        at(26, 13),
        at(27, 13),
        at(2, 12),
        at(3, 12),
        at(24, 12),
        at(25, 12),
        at(3, 11),
        at(24, 11),
        at(4, 10),
        at(23, 10),
        at(5, 9),
        at(6, 9),
        at(7, 9),
        at(10, 9),
        at(11, 9),
        at(12, 9),
        at(16, 9),
        at(17, 9),
        at(18, 9),
        at(20, 9),
        at(21, 9),
        at(22, 9),
    ],
    quantity: 1,
};

/// Ordered core-defence sequence: turrets first so they shoot this turn,
/// then the wall line to soak for them.
pub const CORE_DEFENSE: &[BuildIntent] = &[CORE_TURRETS, CORE_WALLS];

/// Full-width wall line that closes the gaps the core line leaves open.
pub const PERIMETER_WALLS: BuildIntent = BuildIntent {
    unit: UnitKind::Wall,
    locations: &[
        at(0, 13),
        at(1, 13),
        at(26, 13),
        at(27, 13),
        at(2, 12),
        at(3, 12),
        at(24, 12),
        at(25, 12),
        at(3, 11),
        at(24, 11),
        at(4, 10),
        at(23, 10),
        at(5, 9),
        at(6, 9),
        at(7, 9),
        at(8, 9),
        at(9, 9),
        at(10, 9),
        at(11, 9),
        at(12, 9),
        at(13, 9),
        at(14, 9),
        at(15, 9),
        at(16, 9),
        at(17, 9),
        at(18, 9),
        at(19, 9),
        at(20, 9),
        at(21, 9),
        at(22, 9),
    ],
    quantity: 1,
};

/// Second turret ring behind the perimeter.
pub const PERIMETER_TURRETS: BuildIntent = BuildIntent {
    unit: UnitKind::Turret,
    locations: &[
        at(1, 12),
        at(26, 12),
        at(2, 11),
        at(25, 11),
        at(11, 8),
        at(17, 8),
    ],
    quantity: 1,
};

/// Flank and rear turrets filled in once the lines stand.
pub const REAR_TURRETS: BuildIntent = BuildIntent {
    unit: UnitKind::Turret,
    locations: &[
        at(3, 10),
        at(24, 10),
        at(9, 8),
        at(11, 8),
        at(16, 8),
        at(18, 8),
        at(10, 3),
        at(17, 3),
    ],
    quantity: 1,
};

/// Spot walls shielding the corner and flank turrets.
pub const REINFORCING_WALLS: BuildIntent = BuildIntent {
    unit: UnitKind::Wall,
    locations: &[at(25, 13), at(23, 11), at(2, 13), at(4, 11)],
    quantity: 1,
};

/// Ordered extra-defence sequence issued on reinforcement turns.
pub const EXTRA_DEFENSE: &[BuildIntent] = &[
    PERIMETER_WALLS,
    PERIMETER_TURRETS,
    REAR_TURRETS,
    REINFORCING_WALLS,
];

/// Front-line wall cells cleared every reinforcement turn so the next
/// rebuild replaces them at full health instead of leaving worn walls up.
pub const FRONT_WALL_REFRESH: &[Location] = &[at(19, 9), at(20, 9)];

/// Launch candidates for the offense-turn demolisher salvo.
pub const DEMOLISHER_SALVO_LAUNCHES: &[Location] = &[at(16, 2)];

/// Launch candidates for the offense-turn scout rush.
pub const SCOUT_RUSH_LAUNCHES: &[Location] = &[at(15, 1)];

/// A mobile deploy before its launch cell is known. The planner fills in
/// the cell each turn from the risk evaluator and issues the spawn fresh.
#[derive(Clone, Copy, Debug)]
pub struct MobileDeploy {
    pub unit: UnitKind,
    pub quantity: u32,
}

/// Demolisher pair sent from the safest open edge cell on the setup turn.
pub const OPENING_DEMOLISHERS: MobileDeploy = MobileDeploy {
    unit: UnitKind::Demolisher,
    quantity: OPENING_DEMOLISHER_COUNT,
};

/// Offense-turn demolisher salvo.
pub const DEMOLISHER_SALVO: MobileDeploy = MobileDeploy {
    unit: UnitKind::Demolisher,
    quantity: SALVO_DEMOLISHER_COUNT,
};

/// Offense-turn scout rush; the quantity over-asks on purpose and the
/// engine clamps it to the movement-point balance.
pub const SCOUT_RUSH: MobileDeploy = MobileDeploy {
    unit: UnitKind::Scout,
    quantity: SCOUT_RUSH_REQUEST,
};
