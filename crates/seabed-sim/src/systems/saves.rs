//! Scores and surface reports.

use seabed_core::world::{Scores, WorldState};

use crate::snapshot::TurnSnapshot;

pub fn run(world: &mut WorldState, snapshot: &TurnSnapshot) {
    world.scores = Scores {
        own_score: snapshot.own_score,
        opponent_score: snapshot.opponent_score,
        own_saved: snapshot.own_saved.len(),
        opponent_saved: snapshot.opponent_saved.len(),
    };

    for &id in &snapshot.own_saved {
        match world.creature_mut(id) {
            Some(creature) => creature.saved_by_self = true,
            None => tracing::warn!(creature = id, "save report for unknown creature"),
        }
    }
    for &id in &snapshot.opponent_saved {
        match world.creature_mut(id) {
            Some(creature) => creature.saved_by_opponent = true,
            None => tracing::warn!(creature = id, "opponent save for unknown creature"),
        }
    }
}
