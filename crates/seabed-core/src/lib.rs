//! Core types and definitions for the seabed drone bot.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, world records, drone actions, errors and constants.
//! It performs no I/O.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod error;
pub mod types;
pub mod world;

#[cfg(test)]
mod tests;
