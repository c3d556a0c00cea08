//! Radar hints. Replaced wholesale every turn.

use seabed_core::world::WorldState;

use crate::snapshot::RadarBlip;

pub fn run(world: &mut WorldState, blips: &[RadarBlip]) {
    for creature in &mut world.creatures {
        creature.radar.clear();
    }

    for blip in blips {
        match world.creature_mut(blip.creature) {
            Some(creature) => {
                creature.radar.insert(blip.drone, blip.direction);
            }
            None => tracing::warn!(creature = blip.creature, "radar blip for unknown creature"),
        }
    }
}
