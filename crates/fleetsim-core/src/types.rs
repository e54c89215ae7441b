//! Fundamental telemetry types.

use serde::{Deserialize, Serialize};

/// The four sensor channels reported by every vehicle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sensors {
    /// Coolant temperature (°C).
    pub engine_temp: f64,
    /// Brake pad wear (percent, 0-100).
    pub brake_wear: f64,
    /// Battery voltage (V).
    pub battery: f64,
    /// Oil pressure (PSI).
    pub oil_pressure: f64,
}

impl Sensors {
    pub fn new(engine_temp: f64, brake_wear: f64, battery: f64, oil_pressure: f64) -> Self {
        Self {
            engine_temp,
            brake_wear,
            battery,
            oil_pressure,
        }
    }
}
