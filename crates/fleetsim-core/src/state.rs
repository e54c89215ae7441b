//! Vehicle records and the snapshot handed to observers after each tick.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::VehicleStatus;
use crate::events::Alert;
use crate::types::Sensors;

/// A tracked vehicle as seen by the host.
///
/// Used both as the construction input and inside snapshots. On input,
/// `health_score`, `status` and `odometer` are ignored: the engine derives the
/// first two from `sensors` and seeds the odometer itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub model: String,
    pub year: u16,
    pub owner: String,
    pub city: String,
    /// Date of the last workshop visit (`YYYY-MM-DD`).
    #[serde(default)]
    pub last_service: String,
    #[serde(default)]
    pub health_score: u8,
    #[serde(default)]
    pub status: VehicleStatus,
    pub sensors: Sensors,
    /// Kilometres.
    #[serde(default)]
    pub odometer: f64,
}

/// Complete simulation state published after each tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSnapshot {
    /// In fleet order.
    pub vehicles: Vec<Vehicle>,
    /// Newest first.
    pub alerts: Vec<Alert>,
    pub is_running: bool,
    pub speed: f64,
    /// Instant of the last completed tick (construction time before the first).
    pub last_update: DateTime<Utc>,
}

impl SimulationSnapshot {
    pub fn vehicle(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    pub fn critical_alert_count(&self) -> usize {
        self.alerts.iter().filter(|a| a.is_critical()).count()
    }
}
