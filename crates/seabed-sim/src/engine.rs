//! Turn engine: owns the world and tracking state across the whole game.
//!
//! `TurnEngine` folds each snapshot into the world, clears the per-turn
//! claims and asks the decision engine for one action per owned drone.
//! No I/O, so a whole game can be replayed in tests.

use seabed_ai::{decide, EngineConfig, TrackingState};
use seabed_core::commands::DroneAction;
use seabed_core::world::{Creature, DroneId, WorldState};

use crate::snapshot::{GameSetup, TurnSnapshot};
use crate::systems;

/// The turn engine. Owns all state that survives between turns.
pub struct TurnEngine {
    world: WorldState,
    tracking: TrackingState,
    config: EngineConfig,
    turn: u64,
}

impl TurnEngine {
    /// Start a game from the referee's roster.
    pub fn new(setup: &GameSetup, config: EngineConfig) -> Self {
        let creatures = setup
            .roster
            .iter()
            .map(|entry| Creature::new(entry.id, entry.kind, entry.color))
            .collect();
        let world = WorldState::from_roster(creatures);
        tracing::info!(creatures = world.creatures.len(), "game initialised");

        Self {
            world,
            tracking: TrackingState::new(),
            config,
            turn: 0,
        }
    }

    /// Play one turn. Actions come back in ascending drone id order.
    pub fn play_turn(&mut self, snapshot: &TurnSnapshot) -> Vec<(DroneId, DroneAction)> {
        self.turn += 1;
        let _span = tracing::info_span!("turn", turn = self.turn).entered();

        systems::apply_snapshot(&mut self.world, snapshot);
        self.tracking.reset(&self.world);
        self.trace_creatures();

        let mut drones = self.world.my_drones.clone();
        drones.sort_by_key(|d| d.id);

        let actions: Vec<_> = drones
            .iter()
            .map(|drone| {
                tracing::debug!(
                    drone = drone.id,
                    x = drone.position.x,
                    y = drone.position.y,
                    battery = drone.battery,
                    emergency = drone.emergency,
                    "deciding"
                );
                let action = decide(&self.world, drone, &mut self.tracking, &self.config);
                (drone.id, action)
            })
            .collect();

        tracing::debug!(
            own_score = self.world.scores.own_score,
            opponent_score = self.world.scores.opponent_score,
            pursued = ?self.tracking.pursued_ids(),
            "turn complete"
        );
        actions
    }

    /// Number of turns played so far.
    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn world(&self) -> &WorldState {
        &self.world
    }

    pub fn tracking(&self) -> &TrackingState {
        &self.tracking
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn trace_creatures(&self) {
        if !tracing::enabled!(tracing::Level::TRACE) {
            return;
        }
        for creature in &self.world.creatures {
            match serde_json::to_string(creature) {
                Ok(json) => tracing::trace!(creature = creature.id, %json, "creature"),
                Err(err) => tracing::trace!(creature = creature.id, %err, "creature dump failed"),
            }
        }
    }
}
