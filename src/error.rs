use crate::location::Location;
use thiserror::Error;

/// Contract violations that abort the current turn's decision sequence.
///
/// Engine-side rejections (a spawn that cannot be afforded, an upgrade of a
/// missing structure) are not errors: the engine silently no-ops those and
/// the planner carries on. Only results that can never come from a healthy
/// engine land here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StrategyError {
    /// The risk evaluator was handed zero candidates. The planner is
    /// required to pre-filter and skip the deploy instead.
    #[error("spawn-point selection requires at least one candidate")]
    EmptyCandidateSet,

    /// The external pathfinder produced a cell outside the playing field.
    #[error("pathfinder produced out-of-arena cell {0}")]
    PathOutOfArena(Location),
}

/// Problems with the engine-supplied match configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("match config lists {got} unit types, expected {expected}")]
    MissingUnitInformation { expected: usize, got: usize },
}
