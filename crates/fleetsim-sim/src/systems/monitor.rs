//! Threshold monitor: turns readings into alerts.
//!
//! Critical breaches always try to raise a critical alert. Elevated
//! readings raise a warning only when a per-component random gate passes,
//! which keeps a vehicle hovering near a limit from flooding the log. Both
//! go through the alert log's cooldown.

use chrono::{DateTime, Utc};
use rand::Rng;

use fleetsim_core::constants::*;
use fleetsim_core::enums::{AlertSeverity, Component};
use fleetsim_core::types::Sensors;

use crate::alert_log::AlertLog;
use crate::config::AlertPolicy;
use crate::random::chance;

/// How far a reading is outside its normal band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breach {
    None,
    Elevated,
    Critical,
}

/// Classify one component's reading.
pub fn classify(component: Component, sensors: &Sensors, policy: &AlertPolicy) -> Breach {
    let (critical, elevated) = match component {
        Component::Engine => (
            sensors.engine_temp > ENGINE_TEMP_CRITICAL,
            sensors.engine_temp > ENGINE_TEMP_MAX,
        ),
        Component::BrakePads => (
            sensors.brake_wear > BRAKE_WEAR_CRITICAL,
            sensors.brake_wear > policy.brake_elevated_wear,
        ),
        Component::OilPressure => (
            sensors.oil_pressure < OIL_PRESSURE_CRITICAL,
            sensors.oil_pressure < OIL_PRESSURE_LOW,
        ),
        Component::Battery => (
            sensors.battery < BATTERY_CRITICAL,
            sensors.battery < BATTERY_LOW,
        ),
    };

    if critical {
        Breach::Critical
    } else if elevated {
        Breach::Elevated
    } else {
        Breach::None
    }
}

/// Alert text for a breach, including the reading.
pub fn message(component: Component, severity: AlertSeverity, sensors: &Sensors) -> String {
    match (component, severity) {
        (Component::Engine, AlertSeverity::Critical) => {
            format!(
                "Engine temperature critically high: {:.1}°C",
                sensors.engine_temp
            )
        }
        (Component::Engine, AlertSeverity::Warning) => {
            format!("Engine temperature elevated: {:.1}°C", sensors.engine_temp)
        }
        (Component::BrakePads, AlertSeverity::Critical) => {
            format!("Brake pads critically worn: {:.1}%", sensors.brake_wear)
        }
        (Component::BrakePads, AlertSeverity::Warning) => {
            format!("Brake pads wearing: {:.1}%", sensors.brake_wear)
        }
        (Component::OilPressure, AlertSeverity::Critical) => {
            format!(
                "Oil pressure critically low: {:.1} PSI",
                sensors.oil_pressure
            )
        }
        (Component::OilPressure, AlertSeverity::Warning) => {
            format!("Oil pressure low: {:.1} PSI", sensors.oil_pressure)
        }
        (Component::Battery, AlertSeverity::Critical) => {
            format!("Battery voltage critically low: {:.2}V", sensors.battery)
        }
        (Component::Battery, AlertSeverity::Warning) => {
            format!("Battery voltage low: {:.2}V", sensors.battery)
        }
    }
}

/// Alert text for a manually injected failure.
pub fn failure_message(component: Component, sensors: &Sensors) -> String {
    let action = match component {
        Component::Engine => "overheating detected",
        Component::BrakePads => "immediate service required",
        Component::OilPressure => "check immediately",
        Component::Battery => "replacement needed",
    };
    let reading = message(component, AlertSeverity::Critical, sensors);
    format!("{reading} - {action}")
}

/// Check one vehicle's readings and raise any warranted alerts.
pub fn run<R: Rng + ?Sized>(
    vehicle_id: &str,
    sensors: &Sensors,
    rng: &mut R,
    policy: &AlertPolicy,
    alerts: &mut AlertLog,
    now: DateTime<Utc>,
) {
    for component in Component::MONITOR_ORDER {
        let severity = match classify(component, sensors, policy) {
            Breach::Critical => AlertSeverity::Critical,
            Breach::Elevated if chance(rng, policy.warning_probability(component)) => {
                AlertSeverity::Warning
            }
            Breach::Elevated | Breach::None => continue,
        };
        alerts.raise(
            vehicle_id,
            severity,
            component,
            message(component, severity, sensors),
            now,
        );
    }
}
