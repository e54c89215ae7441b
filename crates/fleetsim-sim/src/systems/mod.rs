//! Per-tick systems.
//!
//! Systems are functions over plain data or the hecs world. They hold no
//! state; everything lives in components, the alert log or the engine.

pub mod health;
pub mod monitor;
pub mod odometer;
pub mod sensors;
pub mod snapshot;
