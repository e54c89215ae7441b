//! Snapshot system: reads the world and builds owned vehicle records.
//!
//! This system is read-only; it never modifies the world.

use hecs::{Entity, World};

use fleetsim_core::state::Vehicle;
use fleetsim_core::types::Sensors;

use crate::components::{Health, Odometer, VehicleProfile};

/// Build a `Vehicle` for each listed entity, in order.
pub fn build_vehicles(world: &World, entities: &[Entity]) -> Vec<Vehicle> {
    entities
        .iter()
        .filter_map(|&entity| build_vehicle(world, entity))
        .collect()
}

/// Build one vehicle record, if the entity is a vehicle.
pub fn build_vehicle(world: &World, entity: Entity) -> Option<Vehicle> {
    let mut query = world
        .query_one::<(&VehicleProfile, &Sensors, &Health, &Odometer)>(entity)
        .ok()?;
    let (profile, sensors, health, odometer) = query.get()?;

    Some(Vehicle {
        id: profile.id.clone(),
        model: profile.model.clone(),
        year: profile.year,
        owner: profile.owner.clone(),
        city: profile.city.clone(),
        last_service: profile.last_service.clone(),
        health_score: health.score,
        status: health.status,
        sensors: *sensors,
        odometer: odometer.km,
    })
}
