//! Enumeration types used throughout the simulation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{STATUS_CRITICAL_BELOW, STATUS_WARNING_BELOW};
use crate::error::SimError;

/// Coarse health tier, always derived from the health score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    #[default]
    Healthy,
    Warning,
    Critical,
}

impl VehicleStatus {
    /// Map a 0-100 health score onto its tier.
    pub fn from_score(score: u8) -> Self {
        if score < STATUS_CRITICAL_BELOW {
            VehicleStatus::Critical
        } else if score < STATUS_WARNING_BELOW {
            VehicleStatus::Warning
        } else {
            VehicleStatus::Healthy
        }
    }
}

/// Alert severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Warning,
    Critical,
}

/// Monitored vehicle component. Serialized as its dashboard label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Component {
    #[serde(rename = "Engine")]
    Engine,
    #[serde(rename = "Brake Pads")]
    BrakePads,
    #[serde(rename = "Oil Pressure")]
    OilPressure,
    #[serde(rename = "Battery")]
    Battery,
}

impl Component {
    /// Evaluation order used by the threshold monitor.
    pub const MONITOR_ORDER: [Component; 4] = [
        Component::Engine,
        Component::BrakePads,
        Component::OilPressure,
        Component::Battery,
    ];

    /// Human-readable label shown on alerts.
    pub fn label(self) -> &'static str {
        match self {
            Component::Engine => "Engine",
            Component::BrakePads => "Brake Pads",
            Component::OilPressure => "Oil Pressure",
            Component::Battery => "Battery",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Failure kinds that can be injected manually from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureComponent {
    Brake,
    Engine,
    Battery,
    Oil,
}

impl FailureComponent {
    pub const ALL: [FailureComponent; 4] = [
        FailureComponent::Brake,
        FailureComponent::Engine,
        FailureComponent::Battery,
        FailureComponent::Oil,
    ];

    /// The monitored component an injected failure raises alerts against.
    pub fn component(self) -> Component {
        match self {
            FailureComponent::Brake => Component::BrakePads,
            FailureComponent::Engine => Component::Engine,
            FailureComponent::Battery => Component::Battery,
            FailureComponent::Oil => Component::OilPressure,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FailureComponent::Brake => "brake",
            FailureComponent::Engine => "engine",
            FailureComponent::Battery => "battery",
            FailureComponent::Oil => "oil",
        }
    }
}

impl FromStr for FailureComponent {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "brake" => Ok(FailureComponent::Brake),
            "engine" => Ok(FailureComponent::Engine),
            "battery" => Ok(FailureComponent::Battery),
            "oil" => Ok(FailureComponent::Oil),
            other => Err(SimError::UnknownComponent(other.to_string())),
        }
    }
}

impl fmt::Display for FailureComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
