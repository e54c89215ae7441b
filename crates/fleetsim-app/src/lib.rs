//! FLEETSIM host side.
//!
//! Wraps the headless engine in a timer-driven driver, and carries what a
//! dashboard host needs around it: the demo fleet, env configuration and the
//! alert tracker used to surface new critical alerts.

pub mod alert_tracker;
pub mod config;
pub mod driver;
pub mod fleet_data;
pub mod state;

pub use driver::SimulationDriver;
pub use fleetsim_core as core;
