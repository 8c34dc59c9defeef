pub mod arena;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod events;
pub mod layout;
pub mod location;
pub mod planner;
pub mod scoring;

pub use config::{MatchConfig, RawMatchConfig, UnitKind, UnitSpec};
pub use engine::{GameEngine, PlayerSide, ResourceKind};
pub use error::{ConfigError, StrategyError};
pub use events::{BreachEvent, BreachRecord};
pub use location::{edge_locations, EdgeFlags, Location};
pub use planner::{TurnPhase, TurnPlanner};
pub use scoring::{damage_estimate, filter_blocked_locations, least_damage_spawn_location};
