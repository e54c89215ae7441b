//! Telemetry simulation engine for FLEETSIM.
//!
//! Owns the hecs world holding the fleet, runs the per-tick systems
//! (sensor stepping, health scoring, threshold monitoring, odometer) and
//! produces `SimulationSnapshot`s. Completely headless: scheduling lives in
//! the app crate.

pub mod alert_log;
pub mod clock;
pub mod components;
pub mod config;
pub mod engine;
pub mod fleet_store;
pub mod random;
pub mod systems;

pub use engine::SimulationEngine;
pub use fleetsim_core as core;
