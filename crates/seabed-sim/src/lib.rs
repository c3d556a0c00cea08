//! Turn engine for the seabed drone bot.
//!
//! Folds referee snapshots into the world state and runs the decision
//! engine for every owned drone, once per turn.

pub mod engine;
pub mod snapshot;
pub mod systems;

pub use engine::TurnEngine;
pub use seabed_core as core;
