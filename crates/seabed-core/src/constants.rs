//! Game constants and decision tuning parameters.

// --- Board ---

/// Largest valid coordinate on either axis (the board is 10 000 units square).
pub const BOARD_MAX: f64 = 9999.0;

// --- Surfacing ---

/// Unsaved scans a single drone must carry before it heads up to report them.
pub const SURFACE_SCAN_THRESHOLD: usize = 3;

/// Target depth when surfacing. Scans are saved once a drone reaches the band.
pub const SURFACE_BAND_Y: f64 = 500.0;

// --- Radar tracking ---

/// Distance moved per turn along a radar hint.
pub const TRACKING_STEP: f64 = 600.0;

/// Depth above which a tracking drone keeps its light off.
pub const SHALLOW_WATER_DEPTH: f64 = 2000.0;

// --- Hostiles ---

/// A hostile at or within this range of a drone triggers the evasion overlay.
pub const DANGER_RADIUS: f64 = 810.0;

// --- Exploration ---

/// Waypoint used when no rule finds anything to do.
pub const EXPLORE_WAYPOINT_X: f64 = 5000.0;
pub const EXPLORE_WAYPOINT_Y: f64 = 0.0;
