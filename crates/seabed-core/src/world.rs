//! World state records: creatures, drones and scores.
//!
//! Creature records live for the whole game. Their scan and save flags only
//! ever go from false to true; sightings and radar hints are per-turn and
//! get cleared before each turn's data is applied.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::{CreatureColor, CreatureKind, RadarDirection};
use crate::types::{Position, Velocity};

pub type CreatureId = i32;
pub type DroneId = i32;

/// Who has scanned a creature. Each side's history is tracked independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStatus {
    pub by_self: bool,
    pub by_opponent: bool,
    /// Owned drone that holds the scan. Only set alongside `by_self`.
    pub by_drone: Option<DroneId>,
}

/// One creature on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub id: CreatureId,
    pub kind: CreatureKind,
    pub color: CreatureColor,
    /// Zero when the creature is not visible this turn.
    pub position: Position,
    /// Zero when the creature is not visible this turn.
    pub velocity: Velocity,
    pub scan: ScanStatus,
    pub saved_by_self: bool,
    pub saved_by_opponent: bool,
    /// Radar hints for this turn, keyed by the observing drone.
    pub radar: BTreeMap<DroneId, RadarDirection>,
}

impl Creature {
    pub fn new(id: CreatureId, kind: CreatureKind, color: CreatureColor) -> Self {
        let color = if kind.is_hostile() {
            CreatureColor::HOSTILE
        } else {
            color
        };
        Self {
            id,
            kind,
            color,
            position: Position::default(),
            velocity: Velocity::default(),
            scan: ScanStatus::default(),
            saved_by_self: false,
            saved_by_opponent: false,
            radar: BTreeMap::new(),
        }
    }

    pub fn is_hostile(&self) -> bool {
        self.kind.is_hostile()
    }

    /// Reported by a drone this turn.
    pub fn is_visible(&self) -> bool {
        !self.position.is_zero()
    }

    /// Scanned by us and not yet brought to the surface.
    pub fn is_carried_by(&self, drone: DroneId) -> bool {
        self.scan.by_self && !self.saved_by_self && self.scan.by_drone == Some(drone)
    }

    /// Neither scanned nor saved by us.
    pub fn is_wanted(&self) -> bool {
        !self.scan.by_self && !self.saved_by_self
    }

    pub fn radar_hint(&self, drone: DroneId) -> Option<RadarDirection> {
        self.radar.get(&drone).copied()
    }

    pub fn mark_scanned_by_self(&mut self, drone: DroneId) {
        self.scan.by_self = true;
        self.scan.by_opponent = false;
        self.scan.by_drone = Some(drone);
    }

    pub fn mark_scanned_by_opponent(&mut self) {
        self.scan.by_opponent = true;
    }

    pub fn clear_sighting(&mut self) {
        self.position = Position::default();
        self.velocity = Velocity::default();
    }
}

/// One drone as reported this turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Drone {
    pub id: DroneId,
    pub position: Position,
    pub emergency: bool,
    /// Reported but not used by any rule yet.
    pub battery: i32,
}

/// Aggregate scores, for reporting only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub own_score: i32,
    pub opponent_score: i32,
    pub own_saved: usize,
    pub opponent_saved: usize,
}

/// Everything the decision engine may read in a turn.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldState {
    /// Sorted by ascending id.
    pub creatures: Vec<Creature>,
    pub my_drones: Vec<Drone>,
    pub opponent_drones: Vec<Drone>,
    pub scores: Scores,
}

impl WorldState {
    /// Start a game from its creature roster.
    pub fn from_roster(mut creatures: Vec<Creature>) -> Self {
        creatures.sort_by_key(|c| c.id);
        Self {
            creatures,
            ..Self::default()
        }
    }

    pub fn creature(&self, id: CreatureId) -> Option<&Creature> {
        self.creatures
            .binary_search_by_key(&id, |c| c.id)
            .ok()
            .map(|idx| &self.creatures[idx])
    }

    pub fn creature_mut(&mut self, id: CreatureId) -> Option<&mut Creature> {
        match self.creatures.binary_search_by_key(&id, |c| c.id) {
            Ok(idx) => Some(&mut self.creatures[idx]),
            Err(_) => None,
        }
    }

    pub fn is_my_drone(&self, id: DroneId) -> bool {
        self.my_drones.iter().any(|d| d.id == id)
    }
}
