//! Fleet store: baseline and working copies of the fleet.
//!
//! The baseline is the vehicle list the engine was built from and never
//! changes. The working set is a hecs world rebuilt from the baseline on
//! construction and on every reset, so nothing from a previous run survives.

use std::collections::HashMap;

use hecs::{Entity, World};
use rand::Rng;

use fleetsim_core::constants::{ODOMETER_SEED_MIN, ODOMETER_SEED_SPAN};
use fleetsim_core::error::SimError;
use fleetsim_core::state::Vehicle;

use crate::components::{Odometer, VehicleProfile};
use crate::systems::health;

pub struct FleetStore {
    baseline: Vec<Vehicle>,
    world: World,
    /// Entities in fleet order.
    order: Vec<Entity>,
    /// Vehicle id -> entity. With duplicate ids the later vehicle wins.
    index: HashMap<String, Entity>,
}

impl FleetStore {
    /// Take ownership of the fleet as the baseline and spawn the working set.
    pub fn initialize<R: Rng + ?Sized>(
        vehicles: Vec<Vehicle>,
        rng: &mut R,
    ) -> Result<Self, SimError> {
        if vehicles.is_empty() {
            return Err(SimError::EmptyFleet);
        }

        let mut store = Self {
            baseline: vehicles,
            world: World::new(),
            order: Vec::new(),
            index: HashMap::new(),
        };
        store.populate(rng);
        Ok(store)
    }

    /// Discard the working set and respawn it from the baseline with fresh
    /// odometer seeds.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.world.clear();
        self.order.clear();
        self.index.clear();
        self.populate(rng);
    }

    fn populate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.order.reserve(self.baseline.len());
        for vehicle in &self.baseline {
            let entity = spawn_vehicle(&mut self.world, vehicle, seed_odometer(rng));
            self.order.push(entity);
            self.index.insert(vehicle.id.clone(), entity);
        }
    }

    pub fn find(&self, vehicle_id: &str) -> Option<Entity> {
        self.index.get(vehicle_id).copied()
    }

    /// Entities in fleet order.
    pub fn entities(&self) -> &[Entity] {
        &self.order
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Fleet order and the world, borrowed together for systems that walk
    /// the fleet while mutating components.
    pub fn parts_mut(&mut self) -> (&[Entity], &mut World) {
        (&self.order, &mut self.world)
    }

    pub fn baseline(&self) -> &[Vehicle] {
        &self.baseline
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Spawn one vehicle entity. Health is derived from the sensors, never
/// taken from the record.
pub fn spawn_vehicle(world: &mut World, vehicle: &Vehicle, odometer_km: f64) -> Entity {
    let profile = VehicleProfile {
        id: vehicle.id.clone(),
        model: vehicle.model.clone(),
        year: vehicle.year,
        owner: vehicle.owner.clone(),
        city: vehicle.city.clone(),
        last_service: vehicle.last_service.clone(),
    };

    world.spawn((
        profile,
        vehicle.sensors,
        health::evaluate(&vehicle.sensors),
        Odometer { km: odometer_km },
    ))
}

/// Whole kilometres in [10 000, 60 000).
pub fn seed_odometer<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    (rng.gen::<f64>() * ODOMETER_SEED_SPAN).floor() + ODOMETER_SEED_MIN
}
