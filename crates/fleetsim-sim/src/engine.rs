//! Simulation engine, the core of the telemetry simulation.
//!
//! `SimulationEngine` owns the fleet store, the alert log, the RNG and the
//! wall clock. It advances the fleet one tick at a time and produces
//! `SimulationSnapshot`s. Completely headless (no timer), enabling
//! deterministic testing; the app crate's driver decides when to tick.

use chrono::{DateTime, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use fleetsim_core::constants::*;
use fleetsim_core::enums::{AlertSeverity, FailureComponent};
use fleetsim_core::error::SimError;
use fleetsim_core::events::Alert;
use fleetsim_core::state::{SimulationSnapshot, Vehicle};
use fleetsim_core::types::Sensors;

use crate::alert_log::AlertLog;
use crate::clock::{SystemClock, WallClock};
use crate::components::{Health, VehicleProfile};
use crate::config::{validate_speed, SimConfig};
use crate::fleet_store::FleetStore;
use crate::systems;

/// The simulation engine. Generic over the random source so tests and hosts
/// can inject their own; defaults to a seeded ChaCha8.
pub struct SimulationEngine<R = ChaCha8Rng> {
    fleet: FleetStore,
    alerts: AlertLog,
    config: SimConfig,
    speed: f64,
    rng: R,
    clock: Box<dyn WallClock>,
    tick_count: u64,
    last_update: DateTime<Utc>,
}

impl SimulationEngine<ChaCha8Rng> {
    /// Create an engine for the given fleet. Uses `config.seed` if set,
    /// otherwise seeds from the OS.
    pub fn new(vehicles: Vec<Vehicle>, config: SimConfig) -> Result<Self, SimError> {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::with_rng(vehicles, config, rng)
    }
}

impl<R: Rng> SimulationEngine<R> {
    /// Create an engine with an explicit random source. `config.seed` is
    /// ignored.
    pub fn with_rng(
        vehicles: Vec<Vehicle>,
        config: SimConfig,
        mut rng: R,
    ) -> Result<Self, SimError> {
        config.validate()?;
        let fleet = FleetStore::initialize(vehicles, &mut rng)?;
        let clock: Box<dyn WallClock> = Box::new(SystemClock);
        let last_update = clock.now();

        tracing::debug!(
            vehicles = fleet.len(),
            speed = config.speed,
            "simulation engine created"
        );

        Ok(Self {
            alerts: AlertLog::new(&config.alert_policy),
            speed: config.speed,
            fleet,
            config,
            rng,
            clock,
            tick_count: 0,
            last_update,
        })
    }

    /// Replace the wall clock used for alert timestamps and dedup.
    pub fn with_clock(mut self, clock: impl WallClock + 'static) -> Self {
        self.last_update = clock.now();
        self.clock = Box::new(clock);
        self
    }

    /// Advance every vehicle by one tick.
    ///
    /// For each vehicle in fleet order: step sensors, re-derive health, check
    /// thresholds. Then every odometer moves.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        let speed = self.speed;
        let (entities, world) = self.fleet.parts_mut();

        for &entity in entities {
            let Ok((profile, sensors, health)) =
                world.query_one_mut::<(&VehicleProfile, &mut Sensors, &mut Health)>(entity)
            else {
                continue;
            };

            systems::sensors::step(sensors, &mut self.rng, &self.config.sensor_model, speed);
            *health = systems::health::evaluate(sensors);
            systems::monitor::run(
                &profile.id,
                sensors,
                &mut self.rng,
                &self.config.alert_policy,
                &mut self.alerts,
                now,
            );
        }

        systems::odometer::run(world, entities, &mut self.rng, speed);

        self.tick_count += 1;
        self.last_update = now;
        tracing::debug!(
            tick = self.tick_count,
            speed,
            alerts = self.alerts.len(),
            "simulation tick"
        );
    }

    /// Force one sensor to its critical value, re-derive health and raise a
    /// critical alert (subject to the usual cooldown).
    ///
    /// Returns `false`, changing nothing, if the vehicle is unknown.
    pub fn inject_failure(&mut self, vehicle_id: &str, failure: FailureComponent) -> bool {
        let Some(entity) = self.fleet.find(vehicle_id) else {
            tracing::debug!(vehicle_id, %failure, "failure injection for unknown vehicle ignored");
            return false;
        };
        let now = self.clock.now();

        let Ok((sensors, health)) = self
            .fleet
            .world_mut()
            .query_one_mut::<(&mut Sensors, &mut Health)>(entity)
        else {
            return false;
        };

        apply_failure(sensors, failure);
        *health = systems::health::evaluate(sensors);

        let component = failure.component();
        let message = systems::monitor::failure_message(component, sensors);
        self.alerts.raise(
            vehicle_id,
            AlertSeverity::Critical,
            component,
            message,
            now,
        );

        tracing::info!(vehicle_id, %failure, score = health.score, "failure injected");
        true
    }

    /// Restore the fleet to its baseline and clear all alerts.
    pub fn reset(&mut self) {
        self.fleet.reset(&mut self.rng);
        self.alerts.clear();
        self.tick_count = 0;
        tracing::info!(vehicles = self.fleet.len(), "simulation reset to baseline");
    }

    /// Change the speed multiplier. Rejects non-positive or non-finite values
    /// and keeps the previous speed.
    pub fn set_speed(&mut self, speed: f64) -> Result<(), SimError> {
        validate_speed(speed)?;
        self.speed = speed;
        Ok(())
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Ticks completed since construction or the last reset.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn last_update(&self) -> DateTime<Utc> {
        self.last_update
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Owned copies of the working vehicles, in fleet order.
    pub fn vehicles(&self) -> Vec<Vehicle> {
        systems::snapshot::build_vehicles(self.fleet.world(), self.fleet.entities())
    }

    pub fn vehicle(&self, vehicle_id: &str) -> Option<Vehicle> {
        let entity = self.fleet.find(vehicle_id)?;
        systems::snapshot::build_vehicle(self.fleet.world(), entity)
    }

    /// Owned copy of the alert log, newest first.
    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.to_vec()
    }

    /// Full snapshot. The engine does not know whether a timer is driving it,
    /// so the caller supplies `is_running`.
    pub fn snapshot(&self, is_running: bool) -> SimulationSnapshot {
        SimulationSnapshot {
            vehicles: self.vehicles(),
            alerts: self.alerts(),
            is_running,
            speed: self.speed,
            last_update: self.last_update,
        }
    }
}

/// Set the sensor behind `failure` to its fixed critical value.
fn apply_failure(sensors: &mut Sensors, failure: FailureComponent) {
    match failure {
        FailureComponent::Brake => sensors.brake_wear = INJECTED_BRAKE_WEAR,
        FailureComponent::Engine => sensors.engine_temp = INJECTED_ENGINE_TEMP,
        FailureComponent::Battery => sensors.battery = INJECTED_BATTERY,
        FailureComponent::Oil => sensors.oil_pressure = INJECTED_OIL_PRESSURE,
    }
}
