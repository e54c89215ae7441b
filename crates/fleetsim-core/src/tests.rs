#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::constants::*;
    use crate::enums::*;
    use crate::error::SimError;
    use crate::events::Alert;
    use crate::state::{SimulationSnapshot, Vehicle};
    use crate::types::Sensors;

    fn sample_vehicle() -> Vehicle {
        Vehicle {
            id: "MH-02-AB-1234".into(),
            model: "Tata Nexon EV".into(),
            year: 2023,
            owner: "Rahul Sharma".into(),
            city: "Mumbai".into(),
            last_service: "2024-01-15".into(),
            health_score: 100,
            status: VehicleStatus::Healthy,
            sensors: Sensors::new(85.0, 28.0, 12.4, 45.0),
            odometer: 12_345.0,
        }
    }

    #[test]
    fn test_status_bands() {
        assert_eq!(VehicleStatus::from_score(0), VehicleStatus::Critical);
        assert_eq!(VehicleStatus::from_score(49), VehicleStatus::Critical);
        assert_eq!(VehicleStatus::from_score(50), VehicleStatus::Warning);
        assert_eq!(VehicleStatus::from_score(69), VehicleStatus::Warning);
        assert_eq!(VehicleStatus::from_score(70), VehicleStatus::Healthy);
        assert_eq!(VehicleStatus::from_score(100), VehicleStatus::Healthy);
    }

    #[test]
    fn test_status_band_constants_ordered() {
        assert!(STATUS_CRITICAL_BELOW < STATUS_WARNING_BELOW);
    }

    #[test]
    fn test_component_serializes_as_label() {
        for component in Component::MONITOR_ORDER {
            let json = serde_json::to_string(&component).unwrap();
            assert_eq!(json, format!("\"{}\"", component.label()));
            let back: Component = serde_json::from_str(&json).unwrap();
            assert_eq!(back, component);
        }
    }

    #[test]
    fn test_failure_component_parsing() {
        assert_eq!(
            "brake".parse::<FailureComponent>(),
            Ok(FailureComponent::Brake)
        );
        assert_eq!(
            " Oil ".parse::<FailureComponent>(),
            Ok(FailureComponent::Oil)
        );
        assert_eq!(
            "transmission".parse::<FailureComponent>(),
            Err(SimError::UnknownComponent("transmission".into()))
        );
        for failure in FailureComponent::ALL {
            assert_eq!(failure.as_str().parse::<FailureComponent>(), Ok(failure));
        }
    }

    #[test]
    fn test_failure_component_targets() {
        assert_eq!(FailureComponent::Brake.component(), Component::BrakePads);
        assert_eq!(FailureComponent::Engine.component(), Component::Engine);
        assert_eq!(FailureComponent::Battery.component(), Component::Battery);
        assert_eq!(FailureComponent::Oil.component(), Component::OilPressure);
    }

    #[test]
    fn test_vehicle_from_dashboard_json() {
        // Dashboard records carry no odometer; derived fields are optional.
        let json = r#"{
            "id": "KA-01-XY-5678",
            "model": "Mahindra XUV700",
            "year": 2022,
            "owner": "Priya Patel",
            "city": "Bangalore",
            "lastService": "2024-02-20",
            "status": "healthy",
            "sensors": { "engineTemp": 82, "brakeWear": 65, "battery": 12.6, "oilPressure": 48 }
        }"#;
        let vehicle: Vehicle = serde_json::from_str(json).unwrap();
        assert_eq!(vehicle.id, "KA-01-XY-5678");
        assert_eq!(vehicle.sensors.brake_wear, 65.0);
        assert_eq!(vehicle.health_score, 0);
        assert_eq!(vehicle.odometer, 0.0);
    }

    #[test]
    fn test_snapshot_uses_camel_case_keys() {
        let snapshot = SimulationSnapshot {
            vehicles: vec![sample_vehicle()],
            alerts: vec![Alert {
                id: 1,
                vehicle_id: "MH-02-AB-1234".into(),
                severity: AlertSeverity::Critical,
                component: Component::BrakePads,
                message: "Brake pads critically worn: 95.0%".into(),
                timestamp: Utc.with_ymd_and_hms(2024, 3, 15, 10, 23, 0).unwrap(),
            }],
            is_running: true,
            speed: 2.0,
            last_update: Utc.with_ymd_and_hms(2024, 3, 15, 10, 23, 3).unwrap(),
        };

        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["isRunning"], true);
        assert_eq!(value["vehicles"][0]["sensors"]["brakeWear"], 28.0);
        assert_eq!(value["vehicles"][0]["healthScore"], 100);
        assert_eq!(value["alerts"][0]["vehicleId"], "MH-02-AB-1234");
        assert_eq!(value["alerts"][0]["component"], "Brake Pads");
        assert_eq!(value["alerts"][0]["severity"], "critical");

        let back: SimulationSnapshot = serde_json::from_value(value).unwrap();
        assert_eq!(back, snapshot);
        assert_eq!(back.critical_alert_count(), 1);
        assert!(back.vehicle("MH-02-AB-1234").is_some());
        assert!(back.vehicle("nope").is_none());
    }
}
