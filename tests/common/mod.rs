//! Shared test harness: a fixture config and a scripted engine that records
//! every advisory request the planner issues.
#![allow(dead_code)]

use rampart_algo::{GameEngine, Location, MatchConfig, PlayerSide, ResourceKind, UnitKind, UnitSpec};
use std::collections::{HashMap, HashSet};

pub fn test_config() -> MatchConfig {
    let spec = |shorthand: &str, damage: u32, range: f64, cost: f64| UnitSpec {
        shorthand: shorthand.into(),
        damage_per_attack: damage,
        attack_range: range,
        cost,
    };
    MatchConfig::from_unit_information(vec![
        spec("FF", 0, 0.0, 0.5),
        spec("EF", 0, 0.0, 4.0),
        spec("DF", 5, 2.5, 6.0),
        spec("PI", 2, 3.5, 1.0),
        spec("EI", 8, 4.5, 3.0),
        spec("SI", 20, 4.5, 1.0),
    ])
    .unwrap()
}

/// One advisory request as the engine received it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    Spawn {
        unit: UnitKind,
        locations: Vec<Location>,
        quantity: u32,
    },
    Upgrade {
        locations: Vec<Location>,
    },
    Remove {
        locations: Vec<Location>,
    },
}

pub fn spawn(unit: UnitKind, locations: &[Location], quantity: u32) -> Request {
    Request::Spawn {
        unit,
        locations: locations.to_vec(),
        quantity,
    }
}

pub fn upgrade(locations: &[Location]) -> Request {
    Request::Upgrade {
        locations: locations.to_vec(),
    }
}

pub fn remove(locations: &[Location]) -> Request {
    Request::Remove {
        locations: locations.to_vec(),
    }
}

/// Scripted snapshot: canned paths, per-cell attacker counts, an occupancy
/// set, and a log of every request. Unknown launches path to just their own
/// cell, which is all the risk evaluator needs for selection tests.
#[derive(Default)]
pub struct RecordingEngine {
    pub turn: u32,
    pub occupied: HashSet<Location>,
    pub attackers: HashMap<Location, u32>,
    pub paths: HashMap<Location, Vec<Location>>,
    pub requests: Vec<Request>,
}

impl RecordingEngine {
    pub fn at_turn(turn: u32) -> Self {
        RecordingEngine {
            turn,
            ..Default::default()
        }
    }
}

impl GameEngine for RecordingEngine {
    fn turn_number(&self) -> u32 {
        self.turn
    }

    fn path_to_edge(&self, from: Location) -> Vec<Location> {
        self.paths.get(&from).cloned().unwrap_or_else(|| vec![from])
    }

    fn attackers_covering(&self, cell: Location, _target: PlayerSide) -> u32 {
        self.attackers.get(&cell).copied().unwrap_or(0)
    }

    fn is_occupied_by_stationary_unit(&self, cell: Location) -> bool {
        self.occupied.contains(&cell)
    }

    fn resource_balance(&self, _kind: ResourceKind) -> f64 {
        0.0
    }

    fn request_spawn(&mut self, unit: UnitKind, locations: &[Location], quantity: u32) {
        self.requests.push(spawn(unit, locations, quantity));
    }

    fn request_upgrade(&mut self, locations: &[Location]) {
        self.requests.push(upgrade(locations));
    }

    fn request_remove(&mut self, locations: &[Location]) {
        self.requests.push(remove(locations));
    }
}
