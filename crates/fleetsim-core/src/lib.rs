//! Core types and definitions for the FLEETSIM telemetry engine.
//!
//! This crate defines the vocabulary shared across the other crates:
//! vehicle records, sensor readings, alerts, snapshots, constants and the
//! error type. It has no dependency on the engine or any runtime.

pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
