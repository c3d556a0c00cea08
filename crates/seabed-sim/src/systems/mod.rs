//! Steps that fold a turn snapshot into the world state.
//!
//! Each step is a free function over `&mut WorldState`. Run them in the
//! order listed in `apply_snapshot`: scan pairs need this turn's drones.

pub mod radar;
pub mod saves;
pub mod scans;
pub mod sightings;

use seabed_core::world::WorldState;

use crate::snapshot::TurnSnapshot;

/// Apply a full turn snapshot. Monotonic scan and save flags are only ever set.
pub fn apply_snapshot(world: &mut WorldState, snapshot: &TurnSnapshot) {
    saves::run(world, snapshot);
    world.my_drones = snapshot.my_drones.clone();
    world.opponent_drones = snapshot.opponent_drones.clone();
    scans::run(world, &snapshot.scans);
    sightings::run(world, &snapshot.visible);
    radar::run(world, &snapshot.radar);
}
