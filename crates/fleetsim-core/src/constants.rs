//! Simulation constants and tuning parameters.
//!
//! These are the defaults behind `SensorModel`, `AlertPolicy` and the health
//! table. The health table is fixed; the rest can be overridden through
//! `SimConfig`.

// --- Clock ---

/// Interval between ticks at 1x speed (milliseconds).
pub const BASE_TICK_INTERVAL_MS: u64 = 3_000;

/// Speed multipliers offered by the dashboard.
pub const SPEED_PRESETS: [f64; 4] = [1.0, 2.0, 5.0, 10.0];

// --- Engine temperature (°C) ---

pub const ENGINE_TEMP_MIN: f64 = 85.0;
pub const ENGINE_TEMP_MAX: f64 = 95.0;
pub const ENGINE_TEMP_CRITICAL: f64 = 100.0;
/// Hard ceiling a spike can reach.
pub const ENGINE_TEMP_CEILING: f64 = 110.0;
/// Half-width of the per-tick temperature jitter.
pub const ENGINE_TEMP_NOISE: f64 = 1.5;
pub const ENGINE_SPIKE_PROBABILITY: f64 = 0.02;
pub const ENGINE_SPIKE_MIN: f64 = 5.0;
pub const ENGINE_SPIKE_MAX: f64 = 20.0;

// --- Brake wear (%) ---

pub const BRAKE_WEAR_MAX: f64 = 100.0;
pub const BRAKE_WEAR_CRITICAL: f64 = 80.0;
/// Health penalty band starts here.
pub const BRAKE_WEAR_DEGRADED: f64 = 60.0;
/// Warning alerts start here.
pub const BRAKE_WEAR_ELEVATED: f64 = 70.0;
/// Wear added per tick at 1x.
pub const BRAKE_WEAR_RATE: f64 = 0.1;
pub const BRAKE_ANOMALY_PROBABILITY: f64 = 0.01;
pub const BRAKE_ANOMALY_MIN: f64 = 5.0;
pub const BRAKE_ANOMALY_MAX: f64 = 15.0;

// --- Oil pressure (PSI) ---

pub const OIL_PRESSURE_MAX: f64 = 50.0;
pub const OIL_PRESSURE_CRITICAL: f64 = 30.0;
pub const OIL_PRESSURE_LOW: f64 = 35.0;
/// Floor for normal drift (critical - 5).
pub const OIL_PRESSURE_DRIFT_FLOOR: f64 = OIL_PRESSURE_CRITICAL - 5.0;
/// Floor for anomalous drops.
pub const OIL_PRESSURE_FLOOR: f64 = 20.0;
/// Pressure lost per tick at 1x.
pub const OIL_PRESSURE_RATE: f64 = 0.05;
pub const OIL_PRESSURE_NOISE: f64 = 1.0;
pub const OIL_ANOMALY_PROBABILITY: f64 = 0.015;
pub const OIL_ANOMALY_MIN: f64 = 5.0;
pub const OIL_ANOMALY_MAX: f64 = 15.0;

// --- Battery (V) ---

pub const BATTERY_MAX: f64 = 12.8;
pub const BATTERY_CRITICAL: f64 = 12.2;
pub const BATTERY_LOW: f64 = 12.3;
/// Floor for normal drift (critical - 0.5).
pub const BATTERY_DRIFT_FLOOR: f64 = BATTERY_CRITICAL - 0.5;
/// Floor for anomalous drops.
pub const BATTERY_FLOOR: f64 = 11.0;
/// Voltage lost per tick at 1x.
pub const BATTERY_RATE: f64 = 0.001;
pub const BATTERY_ANOMALY_PROBABILITY: f64 = 0.01;
pub const BATTERY_ANOMALY_MIN: f64 = 0.2;
pub const BATTERY_ANOMALY_MAX: f64 = 0.7;

// --- Odometer (km) ---

pub const ODOMETER_SEED_MIN: f64 = 10_000.0;
pub const ODOMETER_SEED_SPAN: f64 = 50_000.0;
/// Distance covered per tick at 1x is uniform in [MIN, MIN + SPAN).
pub const ODOMETER_STEP_MIN: f64 = 0.5;
pub const ODOMETER_STEP_SPAN: f64 = 2.0;

// --- Health table ---

pub const HEALTH_MAX: f64 = 100.0;
pub const ENGINE_CRITICAL_PENALTY: f64 = 30.0;
pub const ENGINE_ELEVATED_PENALTY: f64 = 15.0;
pub const BRAKE_CRITICAL_PENALTY: f64 = 25.0;
pub const BRAKE_DEGRADED_PENALTY: f64 = 10.0;
pub const OIL_CRITICAL_PENALTY: f64 = 20.0;
pub const OIL_LOW_PENALTY: f64 = 10.0;
pub const BATTERY_CRITICAL_PENALTY: f64 = 15.0;
pub const BATTERY_LOW_PENALTY: f64 = 5.0;

/// Scores below this are critical.
pub const STATUS_CRITICAL_BELOW: u8 = 50;
/// Scores below this (and not critical) are warning.
pub const STATUS_WARNING_BELOW: u8 = 70;

// --- Alerts ---

/// Repeat alerts for the same vehicle/component are suppressed for this long.
pub const ALERT_COOLDOWN_SECS: i64 = 30;
/// Maximum number of alerts retained.
pub const ALERT_LOG_CAPACITY: usize = 50;

pub const ENGINE_WARNING_PROBABILITY: f64 = 0.30;
pub const BRAKE_WARNING_PROBABILITY: f64 = 0.20;
pub const OIL_WARNING_PROBABILITY: f64 = 0.25;
pub const BATTERY_WARNING_PROBABILITY: f64 = 0.20;

// --- Failure injection ---

pub const INJECTED_BRAKE_WEAR: f64 = 95.0;
pub const INJECTED_ENGINE_TEMP: f64 = 105.0;
pub const INJECTED_BATTERY: f64 = 11.5;
pub const INJECTED_OIL_PRESSURE: f64 = 25.0;
