//! Demo host configuration read from the environment.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context};

use fleetsim_core::enums::FailureComponent;
use fleetsim_sim::config::{validate_speed, SimConfig};

/// A failure to inject once the driver is running.
#[derive(Debug, Clone, PartialEq)]
pub struct Injection {
    pub vehicle_id: String,
    pub failure: FailureComponent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// `FLEETSIM_SPEED`
    pub speed: f64,
    /// `FLEETSIM_SEED`
    pub seed: Option<u64>,
    /// `FLEETSIM_RUN_SECS`
    pub run_for: Duration,
    /// `FLEETSIM_FLEET_FILE`; the demo fleet is used when unset.
    pub fleet_file: Option<PathBuf>,
    /// `FLEETSIM_INJECT`, e.g. `MH-02-AB-1234:brake,DL-03-PQ-9012:battery`.
    pub injections: Vec<Injection>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            speed: 1.0,
            seed: None,
            run_for: Duration::from_secs(30),
            fleet_file: None,
            injections: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Read the process environment. Call `dotenvy::dotenv()` first to pick
    /// up a `.env` file.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut config = Self::default();

        if let Some(raw) = var("FLEETSIM_SPEED") {
            let speed: f64 = raw
                .parse()
                .with_context(|| format!("FLEETSIM_SPEED is not a number: {raw}"))?;
            validate_speed(speed).context("FLEETSIM_SPEED")?;
            config.speed = speed;
        }
        if let Some(raw) = var("FLEETSIM_SEED") {
            let seed: u64 = raw
                .parse()
                .with_context(|| format!("FLEETSIM_SEED is not a u64: {raw}"))?;
            config.seed = Some(seed);
        }
        if let Some(raw) = var("FLEETSIM_RUN_SECS") {
            let secs: u64 = raw
                .parse()
                .with_context(|| format!("FLEETSIM_RUN_SECS is not a u64: {raw}"))?;
            config.run_for = Duration::from_secs(secs);
        }
        config.fleet_file = var("FLEETSIM_FLEET_FILE").map(PathBuf::from);
        if let Some(raw) = var("FLEETSIM_INJECT") {
            config.injections = parse_injections(&raw)?;
        }

        Ok(config)
    }

    /// Engine configuration for this host.
    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            seed: self.seed,
            speed: self.speed,
            ..SimConfig::default()
        }
    }
}

/// Parse a comma-separated `vehicleId:component` list.
pub fn parse_injections(raw: &str) -> anyhow::Result<Vec<Injection>> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| -> anyhow::Result<Injection> {
            let Some((vehicle_id, component)) = entry.rsplit_once(':') else {
                bail!("injection `{entry}` is not of the form vehicleId:component");
            };
            let vehicle_id = vehicle_id.trim();
            if vehicle_id.is_empty() {
                bail!("injection `{entry}` has no vehicle id");
            }
            let failure = component
                .trim()
                .parse::<FailureComponent>()
                .with_context(|| format!("injection `{entry}`"))?;
            Ok(Injection {
                vehicle_id: vehicle_id.to_string(),
                failure,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.run_for, Duration::from_secs(30));
    }

    #[test]
    fn test_reads_all_variables() {
        let config = AppConfig::from_lookup(lookup(&[
            ("FLEETSIM_SPEED", "5"),
            ("FLEETSIM_SEED", "42"),
            ("FLEETSIM_RUN_SECS", "3"),
            ("FLEETSIM_FLEET_FILE", "fleet.json"),
            ("FLEETSIM_INJECT", "MH-02-AB-1234:brake, DL-03-PQ-9012:battery"),
        ]))
        .unwrap();

        assert_eq!(config.speed, 5.0);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.run_for, Duration::from_secs(3));
        assert_eq!(config.fleet_file, Some(PathBuf::from("fleet.json")));
        assert_eq!(
            config.injections,
            vec![
                Injection {
                    vehicle_id: "MH-02-AB-1234".into(),
                    failure: FailureComponent::Brake,
                },
                Injection {
                    vehicle_id: "DL-03-PQ-9012".into(),
                    failure: FailureComponent::Battery,
                },
            ]
        );

        let sim = config.sim_config();
        assert_eq!(sim.seed, Some(42));
        assert_eq!(sim.speed, 5.0);
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config =
            AppConfig::from_lookup(lookup(&[("FLEETSIM_SPEED", "  "), ("FLEETSIM_SEED", "")]))
                .unwrap();
        assert_eq!(config.speed, 1.0);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_rejects_bad_values() {
        let rejects = |key: &str, value: &str| {
            AppConfig::from_lookup(lookup(&[(key, value)])).is_err()
        };
        assert!(rejects("FLEETSIM_SPEED", "fast"));
        assert!(rejects("FLEETSIM_SPEED", "0"));
        assert!(rejects("FLEETSIM_SEED", "-1"));
        assert!(rejects("FLEETSIM_INJECT", "MH-02-AB-1234:tyres"));
    }

    #[test]
    fn test_parse_injections_shapes() {
        assert!(parse_injections("").unwrap().is_empty());
        assert!(parse_injections("nocolon").is_err());
        assert!(parse_injections(":oil").is_err());
        let parsed = parse_injections("A:oil,,B:engine").unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].failure, FailureComponent::Engine);
    }
}
