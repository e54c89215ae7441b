//! `fleetsim` -- headless fleet telemetry simulation.
//!
//! Runs the demo fleet (or a fleet file) in real time, logging each tick and
//! every newly raised critical alert, then prints the final snapshot as JSON.
//!
//! # Environment variables
//!
//! | Variable              | Default | Description                                   |
//! |-----------------------|---------|-----------------------------------------------|
//! | `FLEETSIM_SPEED`      | `1`     | Speed multiplier (ticks every 3 s / speed)    |
//! | `FLEETSIM_SEED`       | --      | RNG seed for reproducible runs                |
//! | `FLEETSIM_RUN_SECS`   | `30`    | How long to run before stopping               |
//! | `FLEETSIM_FLEET_FILE` | --      | JSON array of vehicles; demo fleet if unset   |
//! | `FLEETSIM_INJECT`     | --      | `vehicleId:component` failures to inject      |

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fleetsim_app::alert_tracker::AlertTracker;
use fleetsim_app::config::AppConfig;
use fleetsim_app::fleet_data;
use fleetsim_app::SimulationDriver;
use fleetsim_sim::SimulationEngine;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fleetsim=info,fleetsim_app=info,fleetsim_sim=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let vehicles = match &config.fleet_file {
        Some(path) => fleet_data::load_fleet(path)?,
        None => fleet_data::demo_fleet(),
    };

    tracing::info!(
        vehicles = vehicles.len(),
        speed = config.speed,
        seed = ?config.seed,
        run_secs = config.run_for.as_secs(),
        "Starting fleetsim",
    );

    let engine = SimulationEngine::new(vehicles, config.sim_config())
        .context("failed to build simulation engine")?;
    let mut driver = SimulationDriver::new(engine);

    let mut tracker = AlertTracker::new();
    tracker.observe(&driver.snapshot());

    driver.start(move |snapshot| {
        for alert in tracker.observe(&snapshot) {
            tracing::warn!(
                vehicle_id = %alert.vehicle_id,
                component = %alert.component,
                "{}",
                alert.message,
            );
        }
        tracing::info!(
            vehicles = snapshot.vehicles.len(),
            alerts = snapshot.alerts.len(),
            critical = snapshot.critical_alert_count(),
            "tick",
        );
    });

    for injection in &config.injections {
        if !driver.inject_failure(&injection.vehicle_id, injection.failure) {
            tracing::warn!(
                vehicle_id = %injection.vehicle_id,
                "no such vehicle, injection skipped"
            );
        }
    }

    std::thread::sleep(config.run_for);
    driver.stop();

    let snapshot = driver.snapshot();
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
