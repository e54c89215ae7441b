//! Engine configuration.
//!
//! All rates, ranges and probabilities of the stochastic model live here so
//! hosts and tests can substitute their own. Defaults come from
//! `fleetsim_core::constants`. Every struct deserializes with
//! `#[serde(default)]`, so a JSON config only needs the fields it overrides.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use fleetsim_core::constants::*;
use fleetsim_core::enums::Component;
use fleetsim_core::error::SimError;

/// A rare anomaly: fires with `probability` per tick, magnitude uniform in
/// `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    pub probability: f64,
    pub min: f64,
    pub max: f64,
}

impl Anomaly {
    fn validate(&self, name: &str) -> Result<(), SimError> {
        check_probability(name, self.probability)?;
        let finite = self.min.is_finite() && self.max.is_finite();
        if !(finite && 0.0 <= self.min && self.min <= self.max) {
            return Err(SimError::Config(format!(
                "{name}: magnitude range [{}, {}) is invalid",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Parameters of the sensor stepper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SensorModel {
    pub engine_temp_noise: f64,
    pub engine_temp_min: f64,
    pub engine_temp_max: f64,
    /// Spikes may exceed `engine_temp_max` up to this value.
    pub engine_temp_ceiling: f64,
    pub engine_spike: Anomaly,

    /// Wear per tick at 1x.
    pub brake_wear_rate: f64,
    pub brake_wear_max: f64,
    pub brake_anomaly: Anomaly,

    /// Pressure lost per tick at 1x.
    pub oil_pressure_rate: f64,
    pub oil_pressure_noise: f64,
    pub oil_pressure_min: f64,
    pub oil_pressure_max: f64,
    /// Anomalous drops never go below this.
    pub oil_pressure_floor: f64,
    pub oil_anomaly: Anomaly,

    /// Voltage lost per tick at 1x.
    pub battery_rate: f64,
    pub battery_min: f64,
    pub battery_max: f64,
    pub battery_floor: f64,
    pub battery_anomaly: Anomaly,
}

impl Default for SensorModel {
    fn default() -> Self {
        Self {
            engine_temp_noise: ENGINE_TEMP_NOISE,
            engine_temp_min: ENGINE_TEMP_MIN,
            engine_temp_max: ENGINE_TEMP_MAX,
            engine_temp_ceiling: ENGINE_TEMP_CEILING,
            engine_spike: Anomaly {
                probability: ENGINE_SPIKE_PROBABILITY,
                min: ENGINE_SPIKE_MIN,
                max: ENGINE_SPIKE_MAX,
            },
            brake_wear_rate: BRAKE_WEAR_RATE,
            brake_wear_max: BRAKE_WEAR_MAX,
            brake_anomaly: Anomaly {
                probability: BRAKE_ANOMALY_PROBABILITY,
                min: BRAKE_ANOMALY_MIN,
                max: BRAKE_ANOMALY_MAX,
            },
            oil_pressure_rate: OIL_PRESSURE_RATE,
            oil_pressure_noise: OIL_PRESSURE_NOISE,
            oil_pressure_min: OIL_PRESSURE_DRIFT_FLOOR,
            oil_pressure_max: OIL_PRESSURE_MAX,
            oil_pressure_floor: OIL_PRESSURE_FLOOR,
            oil_anomaly: Anomaly {
                probability: OIL_ANOMALY_PROBABILITY,
                min: OIL_ANOMALY_MIN,
                max: OIL_ANOMALY_MAX,
            },
            battery_rate: BATTERY_RATE,
            battery_min: BATTERY_DRIFT_FLOOR,
            battery_max: BATTERY_MAX,
            battery_floor: BATTERY_FLOOR,
            battery_anomaly: Anomaly {
                probability: BATTERY_ANOMALY_PROBABILITY,
                min: BATTERY_ANOMALY_MIN,
                max: BATTERY_ANOMALY_MAX,
            },
        }
    }
}

impl SensorModel {
    /// A model with every anomaly disabled. Drift and noise are unchanged.
    pub fn without_anomalies() -> Self {
        let mut model = Self::default();
        model.engine_spike.probability = 0.0;
        model.brake_anomaly.probability = 0.0;
        model.oil_anomaly.probability = 0.0;
        model.battery_anomaly.probability = 0.0;
        model
    }

    pub fn validate(&self) -> Result<(), SimError> {
        check_range("engine temp", self.engine_temp_min, self.engine_temp_max)?;
        check_range("oil pressure", self.oil_pressure_min, self.oil_pressure_max)?;
        check_range("battery", self.battery_min, self.battery_max)?;
        for (name, value) in [
            ("engineTempCeiling", self.engine_temp_ceiling),
            ("brakeWearMax", self.brake_wear_max),
            ("oilPressureFloor", self.oil_pressure_floor),
            ("batteryFloor", self.battery_floor),
        ] {
            if !value.is_finite() {
                return Err(SimError::Config(format!("{name} must be finite")));
            }
        }
        // Negative rates would reverse wear and drain; negative noise is meaningless.
        for (name, value) in [
            ("engineTempNoise", self.engine_temp_noise),
            ("brakeWearRate", self.brake_wear_rate),
            ("oilPressureRate", self.oil_pressure_rate),
            ("oilPressureNoise", self.oil_pressure_noise),
            ("batteryRate", self.battery_rate),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                let reason = format!("{name} must be finite and non-negative");
                return Err(SimError::Config(reason));
            }
        }
        if self.engine_temp_ceiling < self.engine_temp_max {
            return Err(SimError::Config(format!(
                "engineTempCeiling {} is below engineTempMax {}",
                self.engine_temp_ceiling, self.engine_temp_max
            )));
        }
        self.engine_spike.validate("engineSpike")?;
        self.brake_anomaly.validate("brakeAnomaly")?;
        self.oil_anomaly.validate("oilAnomaly")?;
        self.battery_anomaly.validate("batteryAnomaly")?;
        Ok(())
    }
}

/// Parameters of the threshold monitor and alert log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AlertPolicy {
    /// Dedup window, in wall-clock seconds. Not scaled by speed.
    pub cooldown_secs: i64,
    pub capacity: usize,
    pub brake_elevated_wear: f64,
    pub engine_warning_probability: f64,
    pub brake_warning_probability: f64,
    pub oil_warning_probability: f64,
    pub battery_warning_probability: f64,
}

impl Default for AlertPolicy {
    fn default() -> Self {
        Self {
            cooldown_secs: ALERT_COOLDOWN_SECS,
            capacity: ALERT_LOG_CAPACITY,
            brake_elevated_wear: BRAKE_WEAR_ELEVATED,
            engine_warning_probability: ENGINE_WARNING_PROBABILITY,
            brake_warning_probability: BRAKE_WARNING_PROBABILITY,
            oil_warning_probability: OIL_WARNING_PROBABILITY,
            battery_warning_probability: BATTERY_WARNING_PROBABILITY,
        }
    }
}

impl AlertPolicy {
    /// Probability that an elevated (non-critical) reading raises a warning.
    pub fn warning_probability(&self, component: Component) -> f64 {
        match component {
            Component::Engine => self.engine_warning_probability,
            Component::BrakePads => self.brake_warning_probability,
            Component::OilPressure => self.oil_warning_probability,
            Component::Battery => self.battery_warning_probability,
        }
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if self.capacity == 0 {
            return Err(SimError::Config("alert capacity must be at least 1".into()));
        }
        if self.cooldown_secs < 0 {
            return Err(SimError::Config("alert cooldown cannot be negative".into()));
        }
        if TimeDelta::try_seconds(self.cooldown_secs).is_none() {
            return Err(SimError::Config(format!(
                "alert cooldown of {}s is out of range",
                self.cooldown_secs
            )));
        }
        for component in Component::MONITOR_ORDER {
            check_probability(component.label(), self.warning_probability(component))?;
        }
        Ok(())
    }
}

/// Configuration for constructing a `SimulationEngine`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimConfig {
    /// RNG seed. Same seed and fleet = same sensor trajectories.
    /// `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Initial speed multiplier.
    pub speed: f64,
    pub sensor_model: SensorModel,
    pub alert_policy: AlertPolicy,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: None,
            speed: 1.0,
            sensor_model: SensorModel::default(),
            alert_policy: AlertPolicy::default(),
        }
    }
}

impl SimConfig {
    /// A default config with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let config: SimConfig =
            serde_json::from_str(json).map_err(|e| SimError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SimError> {
        validate_speed(self.speed)?;
        self.sensor_model.validate()?;
        self.alert_policy.validate()
    }
}

/// Speed multipliers must be positive and finite.
pub fn validate_speed(speed: f64) -> Result<(), SimError> {
    if speed.is_finite() && speed > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidSpeed(speed))
    }
}

fn check_probability(name: &str, p: f64) -> Result<(), SimError> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        let reason = format!("{name}: probability {p} outside [0, 1]");
        Err(SimError::Config(reason))
    }
}

fn check_range(name: &str, min: f64, max: f64) -> Result<(), SimError> {
    if min.is_finite() && max.is_finite() && min <= max {
        Ok(())
    } else {
        let reason = format!("{name}: range [{min}, {max}] is invalid");
        Err(SimError::Config(reason))
    }
}
