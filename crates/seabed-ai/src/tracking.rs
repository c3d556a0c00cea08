//! Per-turn pursuit bookkeeping.
//!
//! Radar tracking claims a creature for one drone. Later drones in the same
//! turn see the claim and pick something else.

use std::collections::HashMap;

use seabed_core::world::{CreatureId, WorldState};

#[derive(Debug, Clone, Default)]
pub struct TrackingState {
    pursued: HashMap<CreatureId, bool>,
}

impl TrackingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear every claim. Must run before the first drone of a turn is evaluated.
    pub fn reset(&mut self, world: &WorldState) {
        self.pursued.clear();
        self.pursued
            .extend(world.creatures.iter().map(|c| (c.id, false)));
    }

    pub fn is_pursued(&self, id: CreatureId) -> bool {
        self.pursued.get(&id).copied().unwrap_or(false)
    }

    pub fn mark_pursued(&mut self, id: CreatureId) {
        self.pursued.insert(id, true);
    }

    /// Ids claimed so far this turn, ascending.
    pub fn pursued_ids(&self) -> Vec<CreatureId> {
        let mut ids: Vec<_> = self
            .pursued
            .iter()
            .filter_map(|(id, pursued)| pursued.then_some(*id))
            .collect();
        ids.sort_unstable();
        ids
    }
}
