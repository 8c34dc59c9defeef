//! Match configuration resolved once at game start.
//!
//! The engine hands over one description per unit type when the match begins.
//! Everything the decision core needs later (damage constants, deploy costs,
//! wire shorthands) is frozen into an immutable [`MatchConfig`] and passed
//! explicitly to the planner and the risk evaluator.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// The six unit types of the game, in the order the engine lists them.
/// The first three are stationary structures, the rest are mobile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    Wall,
    Support,
    Turret,
    Scout,
    Demolisher,
    Interceptor,
}

impl UnitKind {
    pub const ALL: [UnitKind; 6] = [
        UnitKind::Wall,
        UnitKind::Support,
        UnitKind::Turret,
        UnitKind::Scout,
        UnitKind::Demolisher,
        UnitKind::Interceptor,
    ];

    pub fn is_structure(self) -> bool {
        matches!(self, UnitKind::Wall | UnitKind::Support | UnitKind::Turret)
    }

    pub fn is_mobile(self) -> bool {
        !self.is_structure()
    }

    fn index(self) -> usize {
        match self {
            UnitKind::Wall => 0,
            UnitKind::Support => 1,
            UnitKind::Turret => 2,
            UnitKind::Scout => 3,
            UnitKind::Demolisher => 4,
            UnitKind::Interceptor => 5,
        }
    }
}

/// Engine-supplied description of one unit type.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitSpec {
    /// Opaque identifier the wire protocol uses for this unit type.
    pub shorthand: String,
    /// Damage dealt to a mobile unit by one attack, if this type attacks.
    #[serde(default)]
    pub damage_per_attack: u32,
    /// Attack radius in cells, if this type attacks.
    #[serde(default)]
    pub attack_range: f64,
    /// Cost of one unit, in structure points for structures and movement
    /// points for mobile units.
    #[serde(default)]
    pub cost: f64,
}

/// Raw match-config shape as the engine serializes it. The out-of-scope
/// transport layer deserializes into this and converts via `TryFrom`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMatchConfig {
    pub unit_information: Vec<UnitSpec>,
}

/// Immutable per-match configuration, indexed by [`UnitKind`].
#[derive(Clone, Debug)]
pub struct MatchConfig {
    units: Vec<UnitSpec>,
}

impl MatchConfig {
    /// Build from the engine's unit list. The list must cover every unit
    /// kind, in engine order; extra trailing entries are ignored.
    pub fn from_unit_information(units: Vec<UnitSpec>) -> Result<Self, ConfigError> {
        if units.len() < UnitKind::ALL.len() {
            return Err(ConfigError::MissingUnitInformation {
                expected: UnitKind::ALL.len(),
                got: units.len(),
            });
        }
        Ok(MatchConfig { units })
    }

    pub fn unit(&self, kind: UnitKind) -> &UnitSpec {
        &self.units[kind.index()]
    }

    pub fn shorthand(&self, kind: UnitKind) -> &str {
        &self.unit(kind).shorthand
    }

    /// Damage one turret attack deals to a traversing mobile unit. This is
    /// the per-attack constant the risk evaluator weights path exposure by.
    pub fn turret_damage(&self) -> u32 {
        self.unit(UnitKind::Turret).damage_per_attack
    }
}

impl TryFrom<RawMatchConfig> for MatchConfig {
    type Error = ConfigError;

    fn try_from(raw: RawMatchConfig) -> Result<Self, ConfigError> {
        MatchConfig::from_unit_information(raw.unit_information)
    }
}
