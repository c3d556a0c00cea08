//! Unsaved scans held by drones. A pair from one of our drones marks the
//! creature as ours; any other drone marks it as the opponent's.

use seabed_core::world::WorldState;

use crate::snapshot::DroneScan;

pub fn run(world: &mut WorldState, scans: &[DroneScan]) {
    for scan in scans {
        let ours = world.is_my_drone(scan.drone);
        let Some(creature) = world.creature_mut(scan.creature) else {
            tracing::warn!(
                drone = scan.drone,
                creature = scan.creature,
                "scan of unknown creature"
            );
            continue;
        };
        if ours {
            creature.mark_scanned_by_self(scan.drone);
        } else {
            creature.mark_scanned_by_opponent();
        }
    }
}
