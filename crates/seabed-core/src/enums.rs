//! Enumeration types used throughout the bot.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SeabedError};

/// Creature category. `Monster` is the hostile kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreatureKind {
    Jelly,
    Fish,
    Crab,
    Monster,
}

/// Creature colour (scoring category).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreatureColor {
    Pink,
    Yellow,
    Green,
    Blue,
    Red,
}

/// Coarse radar bearing from a drone to a creature it cannot see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RadarDirection {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Drone floodlight state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Light {
    #[default]
    Off,
    On,
}

impl CreatureKind {
    /// Protocol kind code. `-1` is the hostile marker.
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            0 => Ok(CreatureKind::Jelly),
            1 => Ok(CreatureKind::Fish),
            2 => Ok(CreatureKind::Crab),
            3 | -1 => Ok(CreatureKind::Monster),
            other => Err(SeabedError::UnknownKind(other)),
        }
    }

    pub fn is_hostile(self) -> bool {
        self == CreatureKind::Monster
    }
}

impl CreatureColor {
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            0 => Ok(CreatureColor::Pink),
            1 => Ok(CreatureColor::Yellow),
            2 => Ok(CreatureColor::Green),
            3 => Ok(CreatureColor::Blue),
            4 => Ok(CreatureColor::Red),
            other => Err(SeabedError::UnknownColor(other)),
        }
    }

    /// Colour assigned to every hostile, whatever the roster says.
    pub const HOSTILE: CreatureColor = CreatureColor::Red;
}

/// Decode a roster entry's kind and colour codes. Kind `-1` is a hostile,
/// whose colour code is meaningless and replaced by the hostile colour.
pub fn decode_species(color_code: i32, kind_code: i32) -> Result<(CreatureKind, CreatureColor)> {
    let kind = CreatureKind::from_code(kind_code)?;
    let color = if kind.is_hostile() {
        CreatureColor::HOSTILE
    } else {
        CreatureColor::from_code(color_code)?
    };
    Ok((kind, color))
}

impl RadarDirection {
    /// Parse the two-letter protocol code.
    pub fn from_code(code: &str) -> Result<Self> {
        match code {
            "TL" => Ok(RadarDirection::TopLeft),
            "TR" => Ok(RadarDirection::TopRight),
            "BL" => Ok(RadarDirection::BottomLeft),
            "BR" => Ok(RadarDirection::BottomRight),
            other => Err(SeabedError::UnknownDirection(other.to_string())),
        }
    }

    /// Unit step toward the hinted quadrant. Depth grows downward, so "top" is -1.
    pub fn unit_step(self) -> (f64, f64) {
        match self {
            RadarDirection::TopLeft => (-1.0, -1.0),
            RadarDirection::TopRight => (1.0, -1.0),
            RadarDirection::BottomLeft => (-1.0, 1.0),
            RadarDirection::BottomRight => (1.0, 1.0),
        }
    }
}

impl Light {
    pub fn as_flag(self) -> u8 {
        match self {
            Light::Off => 0,
            Light::On => 1,
        }
    }
}

impl fmt::Display for CreatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CreatureKind::Jelly => "JELLY",
            CreatureKind::Fish => "FISH",
            CreatureKind::Crab => "CRAB",
            CreatureKind::Monster => "MONSTER",
        };
        f.write_str(name)
    }
}

impl fmt::Display for CreatureColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CreatureColor::Pink => "PINK",
            CreatureColor::Yellow => "YELLOW",
            CreatureColor::Green => "GREEN",
            CreatureColor::Blue => "BLUE",
            CreatureColor::Red => "RED",
        };
        f.write_str(name)
    }
}

impl fmt::Display for RadarDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            RadarDirection::TopLeft => "TL",
            RadarDirection::TopRight => "TR",
            RadarDirection::BottomLeft => "BL",
            RadarDirection::BottomRight => "BR",
        };
        f.write_str(code)
    }
}
