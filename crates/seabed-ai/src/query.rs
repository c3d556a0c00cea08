//! Spatial queries over the world state.
//!
//! Both lookups scan the creature table in ascending id order and keep the
//! first strictly-closer hit, so ties go to the lowest id.

use seabed_core::world::{Creature, Drone, WorldState};

/// Nearest creature worth scanning: not yet scanned or saved by us,
/// visible this turn, on the board, and not hostile.
pub fn find_closest_unscanned<'w>(world: &'w WorldState, drone: &Drone) -> Option<&'w Creature> {
    closest(
        world.creatures.iter().filter(|c| {
            c.is_wanted() && c.is_visible() && c.position.in_bounds() && !c.is_hostile()
        }),
        drone,
    )
}

/// Nearest hostile, whatever its visibility or scan state.
pub fn find_closest_hostile<'w>(world: &'w WorldState, drone: &Drone) -> Option<&'w Creature> {
    closest(world.creatures.iter().filter(|c| c.is_hostile()), drone)
}

fn closest<'w>(
    candidates: impl Iterator<Item = &'w Creature>,
    drone: &Drone,
) -> Option<&'w Creature> {
    let mut best: Option<(&Creature, f64)> = None;
    for creature in candidates {
        let range = drone.position.distance_to(&creature.position);
        match best {
            Some((_, best_range)) if range >= best_range => {}
            _ => best = Some((creature, range)),
        }
    }
    best.map(|(creature, _)| creature)
}
