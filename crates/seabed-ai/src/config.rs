//! Tunable parameters for the decision cascade.

use seabed_core::constants::*;
use seabed_core::types::Position;

/// Decision parameters. `Default` gives the competition values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Unsaved scans that send a drone to the surface.
    pub surface_scan_threshold: usize,
    /// Depth targeted when surfacing.
    pub surface_y: f64,
    /// Distance moved along a radar hint.
    pub tracking_step: f64,
    /// Above this depth, tracking drones keep the light off.
    pub shallow_depth: f64,
    /// Hostile range that triggers the evasion overlay.
    pub danger_radius: f64,
    /// Fallback target.
    pub explore_waypoint: Position,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            surface_scan_threshold: SURFACE_SCAN_THRESHOLD,
            surface_y: SURFACE_BAND_Y,
            tracking_step: TRACKING_STEP,
            shallow_depth: SHALLOW_WATER_DEPTH,
            danger_radius: DANGER_RADIUS,
            explore_waypoint: Position::new(EXPLORE_WAYPOINT_X, EXPLORE_WAYPOINT_Y),
        }
    }
}
