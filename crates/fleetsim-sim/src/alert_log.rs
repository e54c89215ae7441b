//! Bounded, deduplicated alert log.
//!
//! Stored on `SimulationEngine`, not as ECS entities. Newest entries sit at
//! the front; once `capacity` is exceeded the oldest fall off the back.

use std::collections::VecDeque;

use chrono::{DateTime, Duration, Utc};

use fleetsim_core::enums::{AlertSeverity, Component};
use fleetsim_core::events::Alert;

use crate::config::AlertPolicy;

#[derive(Debug, Clone)]
pub struct AlertLog {
    alerts: VecDeque<Alert>,
    next_id: u64,
    cooldown: Duration,
    capacity: usize,
}

impl AlertLog {
    pub fn new(policy: &AlertPolicy) -> Self {
        Self {
            alerts: VecDeque::new(),
            next_id: 0,
            // `AlertPolicy::validate` rejects windows chrono cannot represent.
            cooldown: Duration::try_seconds(policy.cooldown_secs).unwrap_or(Duration::MAX),
            capacity: policy.capacity,
        }
    }

    /// Record an alert unless one for the same vehicle and component was
    /// raised less than one cooldown ago. Returns the new id if recorded.
    pub fn raise(
        &mut self,
        vehicle_id: &str,
        severity: AlertSeverity,
        component: Component,
        message: String,
        now: DateTime<Utc>,
    ) -> Option<u64> {
        if self.is_suppressed(vehicle_id, component, now) {
            tracing::debug!(vehicle_id, %component, ?severity, "duplicate alert suppressed");
            return None;
        }

        self.next_id += 1;
        let id = self.next_id;
        tracing::debug!(id, vehicle_id, %component, ?severity, %message, "alert raised");

        self.alerts.push_front(Alert {
            id,
            vehicle_id: vehicle_id.to_string(),
            severity,
            component,
            message,
            timestamp: now,
        });
        self.alerts.truncate(self.capacity);
        Some(id)
    }

    /// Whether a recent alert for this vehicle/component is still cooling down.
    pub fn is_suppressed(
        &self,
        vehicle_id: &str,
        component: Component,
        now: DateTime<Utc>,
    ) -> bool {
        self.alerts.iter().any(|a| {
            a.vehicle_id == vehicle_id
                && a.component == component
                && now - a.timestamp < self.cooldown
        })
    }

    /// Drop every alert and restart ids from 1.
    pub fn clear(&mut self) {
        self.alerts.clear();
        self.next_id = 0;
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter()
    }

    /// Owned copy, newest first.
    pub fn to_vec(&self) -> Vec<Alert> {
        self.alerts.iter().cloned().collect()
    }
}
