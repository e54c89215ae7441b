//! Alerts raised by the threshold monitor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{AlertSeverity, Component};

/// An alert in the bounded alert log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// Monotonic per engine, starting at 1. Restarts after a reset.
    pub id: u64,
    pub vehicle_id: String,
    pub severity: AlertSeverity,
    pub component: Component,
    /// Includes the numeric reading that triggered the alert.
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl Alert {
    pub fn is_critical(&self) -> bool {
        self.severity == AlertSeverity::Critical
    }
}
