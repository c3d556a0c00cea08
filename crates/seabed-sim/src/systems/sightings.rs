//! Positions and velocities of creatures visible this turn.

use seabed_core::world::WorldState;

use crate::snapshot::Sighting;

/// Forget last turn's sightings, then record this turn's.
pub fn run(world: &mut WorldState, visible: &[Sighting]) {
    for creature in &mut world.creatures {
        creature.clear_sighting();
    }

    for sighting in visible {
        match world.creature_mut(sighting.creature) {
            Some(creature) => {
                creature.position = sighting.position;
                creature.velocity = sighting.velocity;
            }
            None => tracing::warn!(creature = sighting.creature, "sighting of unknown creature"),
        }
    }
}
