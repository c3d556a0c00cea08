//! Drone actions produced by the decision engine.
//!
//! `Display` renders the line protocol, one line per owned drone.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::Light;
use crate::types::Position;
use crate::world::CreatureId;

/// Trailing field of a move: names the nearest hostile, or how close it is
/// when it sits inside the danger radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HostileNote {
    Id { creature: CreatureId },
    Distance { units: i64 },
}

/// One turn's order for one drone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DroneAction {
    /// Move toward `target`.
    Move {
        target: Position,
        light: Light,
        hostile_note: Option<HostileNote>,
    },
    /// Stay in place. No current rule produces this.
    Wait { light: Light },
}

impl DroneAction {
    pub fn light(&self) -> Light {
        match self {
            DroneAction::Move { light, .. } | DroneAction::Wait { light } => *light,
        }
    }

    pub fn target(&self) -> Option<Position> {
        match self {
            DroneAction::Move { target, .. } => Some(*target),
            DroneAction::Wait { .. } => None,
        }
    }
}

impl fmt::Display for HostileNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostileNote::Id { creature } => write!(f, "{creature}"),
            HostileNote::Distance { units } => write!(f, "{units}"),
        }
    }
}

impl fmt::Display for DroneAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DroneAction::Move {
                target,
                light,
                hostile_note,
            } => {
                write!(
                    f,
                    "MOVE {} {} {}",
                    target.x as i64,
                    target.y as i64,
                    light.as_flag()
                )?;
                if let Some(note) = hostile_note {
                    write!(f, " {note}")?;
                }
                Ok(())
            }
            DroneAction::Wait { light } => write!(f, "WAIT {}", light.as_flag()),
        }
    }
}
