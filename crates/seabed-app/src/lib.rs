//! Seabed drone bot application.
//!
//! Wires the referee protocol on stdin/stdout to the turn engine.

pub mod emitter;
pub mod game_loop;
pub mod logging;
pub mod protocol;

pub use seabed_core as core;
