use crate::constants::{ARENA_SIZE, HALF_ARENA};
use bitflags::*;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

bitflags! {
    /// Selector for the four edge segments of the diamond arena. The bottom
    /// pair belongs to the local player, the top pair to the opponent.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct EdgeFlags: u8 {
        const BOTTOM_LEFT = 1;
        const BOTTOM_RIGHT = 2;
        const TOP_LEFT = 4;
        const TOP_RIGHT = 8;
    }
}

/// A cell of the board grid. Immutable value type, compared by value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(transparent)]
pub struct Location {
    packed: u16,
}

impl Location {
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < ARENA_SIZE && y < ARENA_SIZE);
        Location {
            packed: ((y as u16) << 5) | x as u16,
        }
    }

    #[inline]
    pub fn x(self) -> u8 {
        (self.packed & 0x1F) as u8
    }

    #[inline]
    pub fn y(self) -> u8 {
        (self.packed >> 5) as u8
    }

    /// Whether the cell lies inside the diamond playing field. The grid is a
    /// 28x28 square but only the central diamond is playable; each row `y`
    /// spans `x` in `[13 - y, 14 + y]` on the bottom half and the mirrored
    /// range on the top half.
    pub fn is_in_arena(self) -> bool {
        let (x, y) = (self.x() as i16, self.y() as i16);
        if y < HALF_ARENA as i16 {
            x + y >= HALF_ARENA as i16 - 1 && x - y <= HALF_ARENA as i16
        } else {
            y - x <= HALF_ARENA as i16 && x + y <= (ARENA_SIZE + HALF_ARENA) as i16 - 1
        }
    }

    /// Whether the cell sits on any of the selected edge segments.
    pub fn on_edge(self, edges: EdgeFlags) -> bool {
        let (x, y) = (self.x() as i16, self.y() as i16);
        let half = HALF_ARENA as i16;

        (edges.contains(EdgeFlags::BOTTOM_LEFT) && x + y == half - 1)
            || (edges.contains(EdgeFlags::BOTTOM_RIGHT) && x - y == half)
            || (edges.contains(EdgeFlags::TOP_LEFT) && y - x == half)
            || (edges.contains(EdgeFlags::TOP_RIGHT) && x + y == ARENA_SIZE as i16 + half - 1)
    }

    /// Squared Euclidean distance, for attack-radius tests.
    pub fn distance_squared_to(self, other: Self) -> u32 {
        let dx = self.x() as i32 - other.x() as i32;
        let dy = self.y() as i32 - other.y() as i32;
        (dx * dx + dy * dy) as u32
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x(), self.y())
    }
}

impl Serialize for Location {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (self.x(), self.y()).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Location {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (x, y) = <(u8, u8)>::deserialize(deserializer)?;
        if x >= ARENA_SIZE || y >= ARENA_SIZE {
            return Err(D::Error::custom("coordinate outside the board grid"));
        }
        Ok(Location::new(x, y))
    }
}

/// Enumerate the cells of the selected edge segments, bottom-left first,
/// then bottom-right, top-left, top-right; each segment runs outward from
/// the player corner. Pure geometry: occupancy is not consulted.
pub fn edge_locations(edges: EdgeFlags) -> Vec<Location> {
    let half = HALF_ARENA;
    let mut cells = Vec::new();

    if edges.contains(EdgeFlags::BOTTOM_LEFT) {
        cells.extend((0..half).map(|n| Location::new(half - 1 - n, n)));
    }
    if edges.contains(EdgeFlags::BOTTOM_RIGHT) {
        cells.extend((0..half).map(|n| Location::new(half + n, n)));
    }
    if edges.contains(EdgeFlags::TOP_LEFT) {
        cells.extend((0..half).map(|n| Location::new(half - 1 - n, ARENA_SIZE - 1 - n)));
    }
    if edges.contains(EdgeFlags::TOP_RIGHT) {
        cells.extend((0..half).map(|n| Location::new(half + n, ARENA_SIZE - 1 - n)));
    }

    cells
}
