//! ECS components for vehicle entities.
//!
//! Components are plain data. `Sensors` from the core crate is attached
//! directly; the rest only exist inside the world.

use fleetsim_core::enums::VehicleStatus;

/// Static descriptive fields. Never mutated after spawn.
#[derive(Debug, Clone)]
pub struct VehicleProfile {
    pub id: String,
    pub model: String,
    pub year: u16,
    pub owner: String,
    pub city: String,
    pub last_service: String,
}

/// Derived health. Only the health system writes this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub score: u8,
    pub status: VehicleStatus,
}

/// Distance travelled in kilometres. Never decreases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Odometer {
    pub km: f64,
}
