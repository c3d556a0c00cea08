//! Decision engine for the seabed drone bot.
//!
//! Spatial queries, the per-turn tracking state and the priority rule
//! cascade that turns a world snapshot into one action per drone.

pub mod config;
pub mod decision;
pub mod query;
pub mod rules;
pub mod tracking;

pub use config::EngineConfig;
pub use decision::decide;
pub use seabed_core as core;
pub use tracking::TrackingState;
