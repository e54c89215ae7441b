//! Health evaluator: sensors -> 0-100 score -> status tier.
//!
//! Pure function of the sensor values and the fixed penalty table. Each
//! channel contributes at most one penalty (critical or elevated); penalties
//! add up independently.

use fleetsim_core::constants::*;
use fleetsim_core::enums::VehicleStatus;
use fleetsim_core::types::Sensors;

use crate::components::Health;

/// Health score for a set of readings, clamped to 0..=100.
pub fn score(sensors: &Sensors) -> u8 {
    let mut score = HEALTH_MAX;

    if sensors.engine_temp > ENGINE_TEMP_CRITICAL {
        score -= ENGINE_CRITICAL_PENALTY;
    } else if sensors.engine_temp > ENGINE_TEMP_MAX {
        score -= ENGINE_ELEVATED_PENALTY;
    }

    if sensors.brake_wear > BRAKE_WEAR_CRITICAL {
        score -= BRAKE_CRITICAL_PENALTY;
    } else if sensors.brake_wear > BRAKE_WEAR_DEGRADED {
        score -= BRAKE_DEGRADED_PENALTY;
    }

    if sensors.oil_pressure < OIL_PRESSURE_CRITICAL {
        score -= OIL_CRITICAL_PENALTY;
    } else if sensors.oil_pressure < OIL_PRESSURE_LOW {
        score -= OIL_LOW_PENALTY;
    }

    if sensors.battery < BATTERY_CRITICAL {
        score -= BATTERY_CRITICAL_PENALTY;
    } else if sensors.battery < BATTERY_LOW {
        score -= BATTERY_LOW_PENALTY;
    }

    score.round().clamp(0.0, HEALTH_MAX) as u8
}

/// Score and status together. The only way a `Health` component is built.
pub fn evaluate(sensors: &Sensors) -> Health {
    let score = score(sensors);
    Health {
        score,
        status: VehicleStatus::from_score(score),
    }
}
