//! The priority rules, in the order they are tried.
//!
//! Each rule looks at one drone and either proposes a move or passes.
//! Only `Track` writes to the tracking state.

use std::fmt;

use seabed_core::enums::Light;
use seabed_core::types::Position;
use seabed_core::world::{Drone, WorldState};

use crate::config::EngineConfig;
use crate::query::find_closest_unscanned;
use crate::tracking::TrackingState;

/// Input to the rules for a single drone.
pub struct DecisionContext<'a> {
    pub world: &'a WorldState,
    pub drone: &'a Drone,
    pub config: &'a EngineConfig,
}

/// A move chosen by a rule, before the hostile overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    pub rule: Rule,
    pub target: Position,
    pub light: Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Carry enough unsaved scans back to the surface band.
    Surface,
    /// Go to the nearest visible creature we still need.
    Target,
    /// Follow a radar hint toward an unclaimed creature.
    Track,
    /// Nothing else applies.
    Explore,
}

/// Priority order. The first rule that proposes a move wins.
pub const CASCADE: [Rule; 4] = [Rule::Surface, Rule::Target, Rule::Track, Rule::Explore];

impl Rule {
    pub fn apply(self, ctx: &DecisionContext<'_>, tracking: &mut TrackingState) -> Option<Decision> {
        match self {
            Rule::Surface => surface(ctx),
            Rule::Target => target(ctx),
            Rule::Track => track(ctx, tracking),
            Rule::Explore => Some(explore(ctx)),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rule::Surface => "surface",
            Rule::Target => "target",
            Rule::Track => "track",
            Rule::Explore => "explore",
        };
        f.write_str(name)
    }
}

/// Number of creatures this drone has scanned that are not saved yet.
pub fn carried_scans(world: &WorldState, drone: &Drone) -> usize {
    world
        .creatures
        .iter()
        .filter(|c| c.is_carried_by(drone.id))
        .count()
}

fn surface(ctx: &DecisionContext<'_>) -> Option<Decision> {
    if carried_scans(ctx.world, ctx.drone) < ctx.config.surface_scan_threshold {
        return None;
    }
    Some(Decision {
        rule: Rule::Surface,
        target: Position::new(ctx.drone.position.x, ctx.config.surface_y),
        light: Light::Off,
    })
}

fn target(ctx: &DecisionContext<'_>) -> Option<Decision> {
    let creature = find_closest_unscanned(ctx.world, ctx.drone)?;
    Some(Decision {
        rule: Rule::Target,
        target: creature.position,
        light: Light::On,
    })
}

fn track(ctx: &DecisionContext<'_>, tracking: &mut TrackingState) -> Option<Decision> {
    let drone = ctx.drone;
    let (creature_id, direction) = ctx
        .world
        .creatures
        .iter()
        .filter(|c| {
            c.position.in_bounds() && !c.is_hostile() && c.is_wanted() && !tracking.is_pursued(c.id)
        })
        .find_map(|c| c.radar_hint(drone.id).map(|dir| (c.id, dir)))?;

    let (dx, dy) = direction.unit_step();
    let step = ctx.config.tracking_step;
    let (target, light) = if drone.position.y < ctx.config.shallow_depth {
        (drone.position.offset(0.0, step * dy), Light::Off)
    } else {
        (drone.position.offset(step * dx, step * dy), Light::On)
    };

    tracking.mark_pursued(creature_id);
    tracing::debug!(
        drone = drone.id,
        creature = creature_id,
        %direction,
        "tracking radar hint"
    );

    Some(Decision {
        rule: Rule::Track,
        target,
        light,
    })
}

/// Fallback move to the exploration waypoint.
pub fn explore(ctx: &DecisionContext<'_>) -> Decision {
    Decision {
        rule: Rule::Explore,
        target: ctx.config.explore_waypoint,
        light: Light::Off,
    }
}
