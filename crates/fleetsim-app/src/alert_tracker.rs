//! Host-side detection of newly raised critical alerts.
//!
//! Hosts see whole snapshots, not alert events. The tracker remembers which
//! alert ids the previous snapshot carried and reports critical alerts that
//! were not there before.

use std::collections::HashSet;

use fleetsim_core::events::Alert;
use fleetsim_core::state::SimulationSnapshot;

#[derive(Debug, Default)]
pub struct AlertTracker {
    seen: HashSet<u64>,
}

impl AlertTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Critical alerts in `snapshot` that the previous snapshot did not
    /// carry, newest first. The snapshot's id set becomes the new baseline.
    pub fn observe(&mut self, snapshot: &SimulationSnapshot) -> Vec<Alert> {
        let fresh = snapshot
            .alerts
            .iter()
            .filter(|a| a.is_critical() && !self.seen.contains(&a.id))
            .cloned()
            .collect();
        self.seen = snapshot.alerts.iter().map(|alert| alert.id).collect();
        fresh
    }

    /// Forget every id. Call after an engine reset, since alert ids restart.
    pub fn clear(&mut self) {
        self.seen.clear();
    }

    pub fn tracked(&self) -> usize {
        self.seen.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use fleetsim_core::enums::{AlertSeverity, Component};

    fn alert(id: u64, severity: AlertSeverity) -> Alert {
        Alert {
            id,
            vehicle_id: "MH-02-AB-1234".into(),
            severity,
            component: Component::BrakePads,
            message: format!("alert {id}"),
            timestamp: Utc::now(),
        }
    }

    fn snapshot(alerts: Vec<Alert>) -> SimulationSnapshot {
        SimulationSnapshot {
            vehicles: Vec::new(),
            alerts,
            is_running: true,
            speed: 1.0,
            last_update: Utc::now(),
        }
    }

    #[test]
    fn test_reports_only_new_critical_alerts() {
        let mut tracker = AlertTracker::new();

        let first = tracker.observe(&snapshot(vec![
            alert(2, AlertSeverity::Warning),
            alert(1, AlertSeverity::Critical),
        ]));
        assert_eq!(first.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1]);

        let second = tracker.observe(&snapshot(vec![
            alert(4, AlertSeverity::Critical),
            alert(3, AlertSeverity::Critical),
            alert(2, AlertSeverity::Warning),
            alert(1, AlertSeverity::Critical),
        ]));
        assert_eq!(second.iter().map(|a| a.id).collect::<Vec<_>>(), vec![4, 3]);

        let third = tracker.observe(&snapshot(vec![alert(4, AlertSeverity::Critical)]));
        assert!(third.is_empty());
        assert_eq!(tracker.tracked(), 1);
    }

    #[test]
    fn test_clear_rearms_restarted_ids() {
        let mut tracker = AlertTracker::new();
        tracker.observe(&snapshot(vec![alert(1, AlertSeverity::Critical)]));
        let repeat = snapshot(vec![alert(1, AlertSeverity::Critical)]);
        assert!(tracker.observe(&repeat).is_empty());

        tracker.clear();
        assert_eq!(tracker.tracked(), 0);
        let again = tracker.observe(&snapshot(vec![alert(1, AlertSeverity::Critical)]));
        assert_eq!(again.len(), 1);
    }
}
