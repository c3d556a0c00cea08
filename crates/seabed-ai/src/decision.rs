//! Per-drone decision: run the rule cascade, then the hostile overlay.
//!
//! Pure functions over plain data. The only side effect is the claim the
//! tracking rule records in `TrackingState`.

use seabed_core::commands::{DroneAction, HostileNote};
use seabed_core::enums::Light;
use seabed_core::world::{Creature, Drone, WorldState};

use crate::config::EngineConfig;
use crate::query::find_closest_hostile;
use crate::rules::{explore, Decision, DecisionContext, CASCADE};
use crate::tracking::TrackingState;

/// Decide one drone's action for this turn.
pub fn decide(
    world: &WorldState,
    drone: &Drone,
    tracking: &mut TrackingState,
    config: &EngineConfig,
) -> DroneAction {
    let ctx = DecisionContext {
        world,
        drone,
        config,
    };
    let decision = choose(&ctx, tracking);
    tracing::debug!(
        drone = drone.id,
        rule = %decision.rule,
        x = decision.target.x,
        y = decision.target.y,
        "rule selected"
    );

    let hostile = find_closest_hostile(world, drone);
    apply_hostile_overlay(decision, drone, hostile, config)
}

/// First proposal in cascade order. `Explore` always proposes, so this is total.
pub fn choose(ctx: &DecisionContext<'_>, tracking: &mut TrackingState) -> Decision {
    CASCADE
        .iter()
        .find_map(|rule| rule.apply(ctx, tracking))
        .unwrap_or_else(|| explore(ctx))
}

/// Nudge away from a hostile inside the danger radius.
///
/// Within range the x target becomes the drone's x minus the hostile's x
/// velocity, the light goes off and the note carries the truncated range.
/// Otherwise the move is unchanged and the note names the hostile.
pub fn apply_hostile_overlay(
    decision: Decision,
    drone: &Drone,
    hostile: Option<&Creature>,
    config: &EngineConfig,
) -> DroneAction {
    let Some(hostile) = hostile else {
        return DroneAction::Move {
            target: decision.target,
            light: decision.light,
            hostile_note: None,
        };
    };

    let range = drone.position.distance_to(&hostile.position);
    if range <= config.danger_radius {
        tracing::debug!(
            drone = drone.id,
            hostile = hostile.id,
            range,
            "hostile inside danger radius"
        );
        let mut target = decision.target;
        target.x = drone.position.x - hostile.velocity.x;
        return DroneAction::Move {
            target,
            light: Light::Off,
            hostile_note: Some(HostileNote::Distance {
                units: range as i64,
            }),
        };
    }

    DroneAction::Move {
        target: decision.target,
        light: decision.light,
        hostile_note: Some(HostileNote::Id {
            creature: hostile.id,
        }),
    }
}
