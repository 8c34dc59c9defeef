pub const ARENA_SIZE: u8 = 28;
pub const HALF_ARENA: u8 = 14;

/// Length of the repeating reinforce/offense cycle for turns >= 1. Turns
/// divisible by this go on the offensive, everything else reinforces.
pub const OFFENSE_PERIOD: u32 = 3;

/// Demolishers sent from the safest open edge cell on the setup turn.
pub const OPENING_DEMOLISHER_COUNT: u32 = 2;

/// Demolishers launched together on each offense turn.
pub const SALVO_DEMOLISHER_COUNT: u32 = 3;

/// Scouts requested on each offense turn. Deliberately far more than any
/// movement-point balance affords; the engine truncates the deploy to
/// whatever is affordable, which spends the full remaining balance.
pub const SCOUT_RUSH_REQUEST: u32 = 1000;
