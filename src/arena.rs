//! Offline arena: a deterministic in-memory [`GameEngine`] for native tests
//! and benches.
//!
//! Implements just enough board physics to exercise the decision core:
//! stationary-unit occupancy, BFS pathing to the opposing edge, Euclidean
//! turret coverage, and resource accounting with the engine's
//! truncate-to-affordable clamp on mobile deploys. Requests apply
//! immediately, so within one turn a later query observes an earlier
//! spawn's effects, matching the live engine. It is not a combat simulator:
//! no health, no damage resolution, no frame stepping.

use crate::config::{MatchConfig, UnitKind};
use crate::constants::HALF_ARENA;
use crate::engine::{GameEngine, PlayerSide, ResourceKind};
use crate::location::{EdgeFlags, Location};
use fnv::FnvHashMap;
use pathfinding::directed::bfs::bfs;

/// A structure standing on the board.
#[derive(Copy, Clone, Debug)]
pub struct StationaryUnit {
    pub kind: UnitKind,
    pub owner: PlayerSide,
    pub upgraded: bool,
}

/// Starting balances of a fresh match.
const STARTING_STRUCTURE_POINTS: f64 = 40.0;
const STARTING_MOVEMENT_POINTS: f64 = 5.0;

pub struct Arena {
    config: MatchConfig,
    turn: u32,
    structures: FnvHashMap<Location, StationaryUnit>,
    structure_points: f64,
    movement_points: f64,
    deployed: Vec<(UnitKind, Location, u32)>,
    removed: Vec<Location>,
}

impl Arena {
    pub fn new(config: MatchConfig) -> Self {
        Arena {
            config,
            turn: 0,
            structures: FnvHashMap::default(),
            structure_points: STARTING_STRUCTURE_POINTS,
            movement_points: STARTING_MOVEMENT_POINTS,
            deployed: Vec::new(),
            removed: Vec::new(),
        }
    }

    pub fn with_resources(mut self, structure_points: f64, movement_points: f64) -> Self {
        self.structure_points = structure_points;
        self.movement_points = movement_points;
        self
    }

    pub fn set_turn(&mut self, turn: u32) {
        self.turn = turn;
    }

    /// Place a structure for free, either side. Scenario setup only; the
    /// cost-checked route is [`GameEngine::request_spawn`].
    pub fn place(&mut self, kind: UnitKind, owner: PlayerSide, at: Location) -> bool {
        if !kind.is_structure() || !at.is_in_arena() || self.structures.contains_key(&at) {
            return false;
        }
        let _ = self.structures.insert(
            at,
            StationaryUnit {
                kind,
                owner,
                upgraded: false,
            },
        );
        true
    }

    pub fn structure_at(&self, at: Location) -> Option<&StationaryUnit> {
        self.structures.get(&at)
    }

    /// Mobile deploys applied so far, in request order.
    pub fn deployed(&self) -> &[(UnitKind, Location, u32)] {
        &self.deployed
    }

    /// Cells cleared by remove requests, in request order.
    pub fn removed(&self) -> &[Location] {
        &self.removed
    }

    fn friendly_half(cell: Location) -> bool {
        cell.y() < HALF_ARENA
    }

    /// The edge a unit launched at `from` walks toward: always the one
    /// diagonally opposite its launch edge.
    fn target_edge(from: Location) -> Option<EdgeFlags> {
        if from.on_edge(EdgeFlags::BOTTOM_LEFT) {
            Some(EdgeFlags::TOP_RIGHT)
        } else if from.on_edge(EdgeFlags::BOTTOM_RIGHT) {
            Some(EdgeFlags::TOP_LEFT)
        } else if from.on_edge(EdgeFlags::TOP_LEFT) {
            Some(EdgeFlags::BOTTOM_RIGHT)
        } else if from.on_edge(EdgeFlags::TOP_RIGHT) {
            Some(EdgeFlags::BOTTOM_LEFT)
        } else {
            None
        }
    }

    fn walkable_neighbors(&self, of: Location) -> Vec<Location> {
        const STEPS: [(i16, i16); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
        let bounds = 0..crate::constants::ARENA_SIZE as i16;
        let mut neighbors = Vec::with_capacity(4);
        for (dx, dy) in STEPS {
            let nx = of.x() as i16 + dx;
            let ny = of.y() as i16 + dy;
            if !bounds.contains(&nx) || !bounds.contains(&ny) {
                continue;
            }
            let next = Location::new(nx as u8, ny as u8);
            if next.is_in_arena() && !self.structures.contains_key(&next) {
                neighbors.push(next);
            }
        }
        neighbors
    }
}

impl GameEngine for Arena {
    fn turn_number(&self) -> u32 {
        self.turn
    }

    fn path_to_edge(&self, from: Location) -> Vec<Location> {
        if !from.is_in_arena() || self.structures.contains_key(&from) {
            return Vec::new();
        }
        let Some(goal) = Self::target_edge(from) else {
            return Vec::new();
        };

        bfs(
            &from,
            |cell| self.walkable_neighbors(*cell),
            |cell| cell.on_edge(goal),
        )
        .unwrap_or_default()
    }

    fn attackers_covering(&self, cell: Location, target: PlayerSide) -> u32 {
        let range = self.config.unit(UnitKind::Turret).attack_range;
        let range_squared = range * range;
        let attacker = target.opponent();

        self.structures
            .iter()
            .filter(|(_, unit)| unit.kind == UnitKind::Turret && unit.owner == attacker)
            .filter(|(at, _)| f64::from(cell.distance_squared_to(**at)) <= range_squared)
            .count() as u32
    }

    fn is_occupied_by_stationary_unit(&self, cell: Location) -> bool {
        self.structures.contains_key(&cell)
    }

    fn resource_balance(&self, kind: ResourceKind) -> f64 {
        match kind {
            ResourceKind::StructurePoints => self.structure_points,
            ResourceKind::MovementPoints => self.movement_points,
        }
    }

    fn request_spawn(&mut self, unit: UnitKind, locations: &[Location], quantity: u32) {
        let cost = self.config.unit(unit).cost;

        for &at in locations {
            if !at.is_in_arena() || !Self::friendly_half(at) {
                continue;
            }

            if unit.is_structure() {
                if self.structures.contains_key(&at) || self.structure_points < cost {
                    continue;
                }
                self.structure_points -= cost;
                let _ = self.structures.insert(
                    at,
                    StationaryUnit {
                        kind: unit,
                        owner: PlayerSide::Ally,
                        upgraded: false,
                    },
                );
            } else {
                // Mobile units launch only from open friendly edge cells.
                // Requests beyond the movement-point balance truncate to
                // whatever is affordable.
                if !at.on_edge(EdgeFlags::BOTTOM_LEFT | EdgeFlags::BOTTOM_RIGHT)
                    || self.structures.contains_key(&at)
                {
                    continue;
                }
                let affordable = if cost > 0.0 {
                    (self.movement_points / cost).floor() as u32
                } else {
                    quantity
                };
                let count = quantity.min(affordable);
                if count == 0 {
                    continue;
                }
                self.movement_points -= f64::from(count) * cost;
                self.deployed.push((unit, at, count));
            }
        }
    }

    fn request_upgrade(&mut self, locations: &[Location]) {
        for at in locations {
            let cost = match self.structures.get(at) {
                Some(unit) if unit.owner == PlayerSide::Ally && !unit.upgraded => {
                    self.config.unit(unit.kind).cost
                }
                _ => continue,
            };
            if self.structure_points < cost {
                continue;
            }
            self.structure_points -= cost;
            if let Some(unit) = self.structures.get_mut(at) {
                unit.upgraded = true;
            }
        }
    }

    fn request_remove(&mut self, locations: &[Location]) {
        for &at in locations {
            match self.structures.get(&at) {
                Some(unit) if unit.owner == PlayerSide::Ally => {
                    let _ = self.structures.remove(&at);
                    self.removed.push(at);
                }
                _ => {}
            }
        }
    }
}
