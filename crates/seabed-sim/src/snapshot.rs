//! Game input as delivered by the referee: the roster once, then one
//! snapshot per turn. Plain data, already decoded from the line protocol.

use serde::{Deserialize, Serialize};

use seabed_core::enums::{CreatureColor, CreatureKind, RadarDirection};
use seabed_core::types::{Position, Velocity};
use seabed_core::world::{CreatureId, Drone, DroneId};

/// One creature from the start-of-game roster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: CreatureId,
    pub color: CreatureColor,
    pub kind: CreatureKind,
}

/// Everything sent once before the first turn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameSetup {
    pub roster: Vec<RosterEntry>,
}

/// A drone finished scanning a creature (scan not yet saved).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroneScan {
    pub drone: DroneId,
    pub creature: CreatureId,
}

/// A creature inside some drone's light this turn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sighting {
    pub creature: CreatureId,
    pub position: Position,
    pub velocity: Velocity,
}

/// Radar bearing from one drone to one creature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadarBlip {
    pub drone: DroneId,
    pub creature: CreatureId,
    pub direction: RadarDirection,
}

/// One turn of referee input, in protocol order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TurnSnapshot {
    pub own_score: i32,
    pub opponent_score: i32,
    /// Creatures we have brought to the surface.
    pub own_saved: Vec<CreatureId>,
    /// Creatures the opponent has brought to the surface. The referee labels
    /// this block as the opponent's scan count.
    pub opponent_saved: Vec<CreatureId>,
    pub my_drones: Vec<Drone>,
    pub opponent_drones: Vec<Drone>,
    pub scans: Vec<DroneScan>,
    pub visible: Vec<Sighting>,
    pub radar: Vec<RadarBlip>,
}
