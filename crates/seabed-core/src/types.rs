//! Fundamental geometric types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::BOARD_MAX;

/// 2D position on the board (game units).
/// x = East, y = depth (grows downward from the surface at 0).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity (units per turn).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.as_dvec2().distance(other.as_dvec2())
    }

    /// The origin doubles as the "not visible this turn" sentinel.
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Inside the inclusive board rectangle.
    pub fn in_bounds(&self) -> bool {
        (0.0..=BOARD_MAX).contains(&self.x) && (0.0..=BOARD_MAX).contains(&self.y)
    }

    /// Translate by a delta.
    pub fn offset(&self, dx: f64, dy: f64) -> Position {
        Position::from(self.as_dvec2() + DVec2::new(dx, dy))
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
