//! Demo fleet and fleet file loading.

use std::path::Path;

use anyhow::{ensure, Context};

use fleetsim_core::enums::VehicleStatus;
use fleetsim_core::state::Vehicle;
use fleetsim_core::types::Sensors;

/// The dashboard shows the first ten demo vehicles.
pub const DEMO_FLEET_SIZE: usize = 10;

fn demo_vehicle(
    id: &str,
    model: &str,
    year: u16,
    owner: &str,
    city: &str,
    last_service: &str,
    sensors: Sensors,
) -> Vehicle {
    Vehicle {
        id: id.into(),
        model: model.into(),
        year,
        owner: owner.into(),
        city: city.into(),
        last_service: last_service.into(),
        health_score: 0,
        status: VehicleStatus::default(),
        sensors,
        odometer: 0.0,
    }
}

/// All twelve demo vehicles, in dashboard order.
pub fn all_demo_vehicles() -> Vec<Vehicle> {
    vec![
        demo_vehicle(
            "MH-02-AB-1234",
            "Tata Nexon EV",
            2023,
            "Rahul Sharma",
            "Mumbai",
            "2024-01-15",
            Sensors::new(85.0, 28.0, 12.4, 45.0),
        ),
        demo_vehicle(
            "KA-01-XY-5678",
            "Mahindra XUV700",
            2022,
            "Priya Patel",
            "Bangalore",
            "2024-02-20",
            Sensors::new(82.0, 65.0, 12.6, 48.0),
        ),
        demo_vehicle(
            "DL-03-PQ-9012",
            "Hyundai Creta",
            2023,
            "Amit Kumar",
            "Delhi",
            "2024-01-08",
            Sensors::new(88.0, 35.0, 11.9, 42.0),
        ),
        demo_vehicle(
            "TN-10-RS-3456",
            "Kia Seltos",
            2022,
            "Deepa Nair",
            "Chennai",
            "2024-03-01",
            Sensors::new(80.0, 72.0, 12.7, 50.0),
        ),
        demo_vehicle(
            "GJ-05-CD-7890",
            "Maruti Brezza",
            2023,
            "Vikram Singh",
            "Ahmedabad",
            "2024-02-10",
            Sensors::new(83.0, 58.0, 12.3, 46.0),
        ),
        demo_vehicle(
            "MH-14-EF-2345",
            "Tata Harrier",
            2022,
            "Sneha Reddy",
            "Pune",
            "2023-12-20",
            Sensors::new(92.0, 15.0, 11.5, 38.0),
        ),
        demo_vehicle(
            "KA-03-GH-6789",
            "Toyota Fortuner",
            2021,
            "Karan Mehta",
            "Bangalore",
            "2024-03-10",
            Sensors::new(78.0, 82.0, 12.8, 52.0),
        ),
        demo_vehicle(
            "UP-32-IJ-1234",
            "Hyundai Venue",
            2023,
            "Anjali Gupta",
            "Lucknow",
            "2024-02-28",
            Sensors::new(81.0, 68.0, 12.5, 47.0),
        ),
        demo_vehicle(
            "RJ-14-KL-5678",
            "MG Hector",
            2022,
            "Raj Malhotra",
            "Jaipur",
            "2024-01-25",
            Sensors::new(89.0, 42.0, 12.0, 40.0),
        ),
        demo_vehicle(
            "TG-02-MN-9012",
            "Skoda Kushaq",
            2023,
            "Meera Rao",
            "Hyderabad",
            "2024-03-05",
            Sensors::new(79.0, 75.0, 12.6, 49.0),
        ),
        demo_vehicle(
            "WB-06-OP-3456",
            "Honda City",
            2022,
            "Arun Das",
            "Kolkata",
            "2024-02-15",
            Sensors::new(84.0, 55.0, 12.4, 44.0),
        ),
        demo_vehicle(
            "MP-09-QR-7890",
            "Jeep Compass",
            2021,
            "Neha Verma",
            "Indore",
            "2024-01-30",
            Sensors::new(87.0, 38.0, 12.1, 43.0),
        ),
    ]
}

/// The fleet the dashboard simulates by default.
pub fn demo_fleet() -> Vec<Vehicle> {
    let mut vehicles = all_demo_vehicles();
    vehicles.truncate(DEMO_FLEET_SIZE);
    vehicles
}

/// Parse a JSON array of vehicle records in the dashboard's camelCase shape.
pub fn parse_fleet(json: &str) -> anyhow::Result<Vec<Vehicle>> {
    let vehicles: Vec<Vehicle> = serde_json::from_str(json).context("invalid fleet JSON")?;
    ensure!(!vehicles.is_empty(), "fleet file contains no vehicles");
    Ok(vehicles)
}

pub fn load_fleet(path: impl AsRef<Path>) -> anyhow::Result<Vec<Vehicle>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read fleet file {}", path.display()))?;
    parse_fleet(&json).with_context(|| format!("failed to load fleet from {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_demo_fleet_sizes() {
        assert_eq!(all_demo_vehicles().len(), 12);
        let fleet = demo_fleet();
        assert_eq!(fleet.len(), DEMO_FLEET_SIZE);
        assert_eq!(fleet[0].id, "MH-02-AB-1234");
        assert_eq!(fleet[9].id, "TG-02-MN-9012");
    }

    #[test]
    fn test_demo_ids_unique() {
        let vehicles = all_demo_vehicles();
        let ids: HashSet<_> = vehicles.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids.len(), vehicles.len());
    }

    #[test]
    fn test_parse_dashboard_record() {
        let json = r#"[{
            "id": "MH-02-AB-1234", "model": "Tata Nexon EV", "year": 2023,
            "owner": "Rahul Sharma", "city": "Mumbai", "healthScore": 72,
            "lastService": "2024-01-15", "status": "warning",
            "sensors": { "engineTemp": 85, "brakeWear": 28, "battery": 12.4, "oilPressure": 45 }
        }]"#;
        let fleet = parse_fleet(json).unwrap();
        assert_eq!(fleet.len(), 1);
        assert_eq!(fleet[0].last_service, "2024-01-15");
        assert_eq!(fleet[0].sensors.brake_wear, 28.0);
    }

    #[test]
    fn test_parse_rejects_empty_and_malformed() {
        assert!(parse_fleet("[]").is_err());
        assert!(parse_fleet("{\"id\": 1}").is_err());
    }

    #[test]
    fn test_load_missing_file_has_context() {
        let err = load_fleet("/nonexistent/fleet.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/fleet.json"));
    }
}
