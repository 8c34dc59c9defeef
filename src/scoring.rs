//! Spawn-location risk scoring.
//!
//! Estimates, without running the combat simulation, how much damage a
//! mobile unit would take traversing its computed path: every path cell
//! contributes the number of enemy static defences covering it, weighted by
//! the turret's per-attack damage constant. Attacker presence along the
//! path is the dominant risk factor and defences do not reposition within a
//! turn, so the proxy orders candidates the same way the real resolution
//! would.

use crate::config::MatchConfig;
use crate::engine::{GameEngine, PlayerSide};
use crate::error::StrategyError;
use crate::location::Location;
use itertools::Itertools;

/// Estimated damage a mobile unit takes traversing the path computed from
/// `launch`. A blocked launch yields an empty path and scores zero; callers
/// that care must pre-filter with [`filter_blocked_locations`].
pub fn damage_estimate(
    engine: &dyn GameEngine,
    config: &MatchConfig,
    launch: Location,
) -> Result<u64, StrategyError> {
    let damage_per_hit = u64::from(config.turret_damage());
    let mut total = 0u64;

    for cell in engine.path_to_edge(launch) {
        if !cell.is_in_arena() {
            return Err(StrategyError::PathOutOfArena(cell));
        }
        let attackers = engine.attackers_covering(cell, PlayerSide::Ally);
        total += u64::from(attackers) * damage_per_hit;
    }

    Ok(total)
}

/// Pick the candidate whose path takes the least estimated damage. Ties go
/// to the earliest candidate in the input, so repeated calls on the same
/// snapshot return the same cell. Never synthesizes a location.
pub fn least_damage_spawn_location(
    engine: &dyn GameEngine,
    config: &MatchConfig,
    candidates: &[Location],
) -> Result<Location, StrategyError> {
    let damages: Vec<u64> = candidates
        .iter()
        .map(|&candidate| damage_estimate(engine, config, candidate))
        .collect::<Result<_, _>>()?;

    match damages.iter().position_min() {
        Some(index) => Ok(candidates[index]),
        None => Err(StrategyError::EmptyCandidateSet),
    }
}

/// Drop every cell already occupied by a stationary unit, keeping input
/// order. Mobile units cannot be launched from an occupied cell. May return
/// an empty vector; the caller decides whether that skips the deploy.
pub fn filter_blocked_locations(engine: &dyn GameEngine, locations: &[Location]) -> Vec<Location> {
    locations
        .iter()
        .copied()
        .filter(|&cell| !engine.is_occupied_by_stationary_unit(cell))
        .collect()
}
