//! The capabilities the surrounding game-engine integration supplies.
//!
//! The decision core never talks to the wire protocol or the real combat
//! simulation; it sees the current turn exclusively through this trait.
//! Read queries reflect the snapshot including the cumulative effect of
//! requests already issued this turn. Requests are advisory: the engine
//! re-validates legality (resources, occupancy) and silently no-ops or
//! partially applies anything it cannot satisfy, so none of them return a
//! result for the core to inspect.

use crate::config::UnitKind;
use crate::location::{edge_locations, EdgeFlags, Location};
use serde::{Deserialize, Serialize};

/// Which player a unit or query refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSide {
    Ally,
    Enemy,
}

impl PlayerSide {
    pub fn opponent(self) -> PlayerSide {
        match self {
            PlayerSide::Ally => PlayerSide::Enemy,
            PlayerSide::Enemy => PlayerSide::Ally,
        }
    }
}

/// The two independently tracked currencies. Balances live in the engine;
/// the core only reads them and lets spawn requests spend them implicitly.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    StructurePoints,
    MovementPoints,
}

pub trait GameEngine {
    /// Turn counter from the current snapshot. The core keeps no counter of
    /// its own.
    fn turn_number(&self) -> u32;

    /// The route a mobile unit launched at `from` would follow to the
    /// opposing edge under the current snapshot, launch cell included.
    /// Deterministic for a given snapshot; empty when the cell is blocked
    /// or no route exists.
    fn path_to_edge(&self, from: Location) -> Vec<Location>;

    /// Number of enemy static defences whose attack range currently covers
    /// `cell`, from the perspective of a `target`-owned unit standing there.
    fn attackers_covering(&self, cell: Location, target: PlayerSide) -> u32;

    /// Whether a stationary unit of either player occupies the cell.
    fn is_occupied_by_stationary_unit(&self, cell: Location) -> bool;

    /// Current balance of one resource. Informational only: the core never
    /// gates requests on it.
    fn resource_balance(&self, kind: ResourceKind) -> f64;

    /// Cells of the selected board-edge segments. Pure geometry, so a
    /// default implementation is provided; engines with their own board
    /// model may override.
    fn edge_locations(&self, edges: EdgeFlags) -> Vec<Location> {
        edge_locations(edges)
    }

    /// Attempt to place or deploy `quantity` units of `unit` at each of
    /// `locations`, in order.
    fn request_spawn(&mut self, unit: UnitKind, locations: &[Location], quantity: u32);

    /// Attempt to upgrade the friendly structures at `locations`.
    fn request_upgrade(&mut self, locations: &[Location]);

    /// Ask for the friendly structures at `locations` to be removed.
    fn request_remove(&mut self, locations: &[Location]);
}
