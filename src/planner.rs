//! Turn-cycle decision state machine.
//!
//! Keyed purely on the snapshot's turn counter: turn 0 sets up the base and
//! opens with demolishers, then turns alternate between reinforcing the
//! defence tables and launching the offense package every third turn. All
//! requests are advisory; the engine validates and silently no-ops what it
//! cannot satisfy, and the planner never retries within a turn.

use crate::config::MatchConfig;
use crate::constants::OFFENSE_PERIOD;
use crate::engine::{GameEngine, PlayerSide};
use crate::error::StrategyError;
use crate::events::{BreachEvent, BreachRecord};
use crate::layout::{self, BuildIntent, MobileDeploy};
use crate::location::{EdgeFlags, Location};
use crate::scoring::{filter_blocked_locations, least_damage_spawn_location};
use log::{debug, warn};

/// What a given turn number asks of the planner.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    /// Turn 0: stand up the core defence, open with demolishers.
    Setup,
    /// Rebuild the defence tables and refresh worn front walls.
    Reinforce,
    /// Every third turn from turn 3: demolisher salvo plus scout rush.
    Offense,
}

impl TurnPhase {
    pub fn for_turn(turn: u32) -> TurnPhase {
        if turn == 0 {
            TurnPhase::Setup
        } else if turn % OFFENSE_PERIOD == 0 {
            TurnPhase::Offense
        } else {
            TurnPhase::Reinforce
        }
    }
}

/// Per-match decision state: the frozen config plus the growing breach
/// history. Everything else is recomputed from the snapshot each turn.
pub struct TurnPlanner {
    config: MatchConfig,
    turn: u32,
    breach_history: Vec<BreachRecord>,
}

impl TurnPlanner {
    pub fn new(config: MatchConfig) -> Self {
        TurnPlanner {
            config,
            turn: 0,
            breach_history: Vec::new(),
        }
    }

    /// Run one turn's decision sequence against the engine. Later intents
    /// observe the cumulative effects of earlier ones because the engine
    /// applies each request as it arrives.
    ///
    /// An error here is a broken contract (see [`StrategyError`]), not a
    /// rejected request; the turn's remaining intents are abandoned.
    pub fn plan_turn(&mut self, engine: &mut dyn GameEngine) -> Result<(), StrategyError> {
        self.turn = engine.turn_number();
        let phase = TurnPhase::for_turn(self.turn);
        debug!("planning turn {} ({:?})", self.turn, phase);

        match phase {
            TurnPhase::Setup => {
                self.build_core_defense(engine);
                self.deploy_opening_demolishers(engine)?;
            }
            TurnPhase::Reinforce => {
                self.build_core_defense(engine);
                self.build_defense(engine, layout::EXTRA_DEFENSE);
                engine.request_remove(layout::FRONT_WALL_REFRESH);
            }
            TurnPhase::Offense => {
                self.deploy_mobile(
                    engine,
                    layout::DEMOLISHER_SALVO_LAUNCHES,
                    layout::DEMOLISHER_SALVO,
                )?;
                self.deploy_mobile(engine, layout::SCOUT_RUSH_LAUNCHES, layout::SCOUT_RUSH)?;
            }
        }

        Ok(())
    }

    /// Record opponent breaches from one frame of the event feed. Pure
    /// bookkeeping for future strategy work; current build decisions never
    /// read it.
    pub fn on_action_frame(&mut self, events: &[BreachEvent]) {
        for event in events {
            if event.owner == PlayerSide::Enemy {
                debug!(
                    "got scored on at {} by a {:?}",
                    event.location, event.unit_kind
                );
                self.breach_history.push(BreachRecord {
                    location: event.location,
                    turn: self.turn,
                });
            }
        }
    }

    /// Every opponent breach seen so far, in arrival order.
    pub fn breach_history(&self) -> &[BreachRecord] {
        &self.breach_history
    }

    /// Core defence plus an upgrade pass over its wall line so the walls
    /// soak more damage. Re-spawning standing structures and re-upgrading
    /// upgraded walls are engine-level no-ops, so reissuing every turn is
    /// idempotent.
    fn build_core_defense(&self, engine: &mut dyn GameEngine) {
        self.build_defense(engine, layout::CORE_DEFENSE);
        engine.request_upgrade(layout::CORE_WALLS.locations);
    }

    fn build_defense(&self, engine: &mut dyn GameEngine, intents: &[BuildIntent]) {
        for intent in intents {
            engine.request_spawn(intent.unit, intent.locations, intent.quantity);
        }
    }

    fn deploy_opening_demolishers(
        &self,
        engine: &mut dyn GameEngine,
    ) -> Result<(), StrategyError> {
        let edges = engine.edge_locations(EdgeFlags::BOTTOM_LEFT | EdgeFlags::BOTTOM_RIGHT);
        self.deploy_mobile(engine, &edges, layout::OPENING_DEMOLISHERS)
    }

    /// Shared mobile-deploy path: filter blocked cells, risk-score what is
    /// left, spawn at the winner. Even single fixed candidates route through
    /// here so filtering and scoring stay uniform. When everything is
    /// blocked the deploy is skipped for the turn rather than surfacing
    /// [`StrategyError::EmptyCandidateSet`].
    fn deploy_mobile(
        &self,
        engine: &mut dyn GameEngine,
        candidates: &[Location],
        deploy: MobileDeploy,
    ) -> Result<(), StrategyError> {
        let open = filter_blocked_locations(&*engine, candidates);
        if open.is_empty() {
            warn!(
                "all {} launch candidates for {:?} are blocked; skipping deploy this turn",
                candidates.len(),
                deploy.unit
            );
            return Ok(());
        }

        let best = least_damage_spawn_location(&*engine, &self.config, &open)?;
        engine.request_spawn(deploy.unit, &[best], deploy.quantity);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MatchConfig, UnitKind, UnitSpec};
    use crate::location::Location;

    fn config() -> MatchConfig {
        let spec = |shorthand: &str| UnitSpec {
            shorthand: shorthand.into(),
            damage_per_attack: 0,
            attack_range: 0.0,
            cost: 1.0,
        };
        MatchConfig::from_unit_information(vec![
            spec("FF"),
            spec("EF"),
            spec("DF"),
            spec("PI"),
            spec("EI"),
            spec("SI"),
        ])
        .unwrap()
    }

    #[test]
    fn turn_zero_sets_up_then_every_third_turn_attacks() {
        assert_eq!(TurnPhase::for_turn(0), TurnPhase::Setup);
        assert_eq!(TurnPhase::for_turn(1), TurnPhase::Reinforce);
        assert_eq!(TurnPhase::for_turn(2), TurnPhase::Reinforce);
        assert_eq!(TurnPhase::for_turn(3), TurnPhase::Offense);
        assert_eq!(TurnPhase::for_turn(4), TurnPhase::Reinforce);
        assert_eq!(TurnPhase::for_turn(5), TurnPhase::Reinforce);
        assert_eq!(TurnPhase::for_turn(6), TurnPhase::Offense);
        assert_eq!(TurnPhase::for_turn(300), TurnPhase::Offense);
    }

    #[test]
    fn only_opponent_breaches_enter_the_history() {
        let mut planner = TurnPlanner::new(config());
        let events = [
            BreachEvent {
                location: Location::new(5, 13),
                unit_kind: UnitKind::Scout,
                owner: PlayerSide::Enemy,
            },
            BreachEvent {
                location: Location::new(20, 14),
                unit_kind: UnitKind::Scout,
                owner: PlayerSide::Ally,
            },
        ];

        planner.on_action_frame(&events);

        assert_eq!(
            planner.breach_history(),
            &[BreachRecord {
                location: Location::new(5, 13),
                turn: 0,
            }]
        );
    }

    #[test]
    fn breach_records_carry_the_turn_being_played() {
        let mut planner = TurnPlanner::new(config());
        planner.turn = 7;

        planner.on_action_frame(&[BreachEvent {
            location: Location::new(0, 13),
            unit_kind: UnitKind::Demolisher,
            owner: PlayerSide::Enemy,
        }]);

        assert_eq!(planner.breach_history()[0].turn, 7);
    }
}
