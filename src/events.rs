//! Per-frame breach events and the retained breach history.

use crate::config::UnitKind;
use crate::engine::PlayerSide;
use crate::location::Location;
use serde::Deserialize;

/// One breach reported by the engine's per-frame event feed: a mobile unit
/// finished its traversal by crossing into the defender's territory. The
/// feed carries more detail than the core consumes; only `location` and
/// `owner` drive bookkeeping.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreachEvent {
    pub location: Location,
    pub unit_kind: UnitKind,
    pub owner: PlayerSide,
}

/// Where and when the opponent broke through our defence. Appended for the
/// remainder of the match, never evicted; a single match is short enough
/// that the history stays small.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BreachRecord {
    pub location: Location,
    pub turn: u32,
}
