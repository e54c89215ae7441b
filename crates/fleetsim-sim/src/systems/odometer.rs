//! Odometer system: every vehicle covers some distance each tick.

use hecs::{Entity, World};
use rand::Rng;

use fleetsim_core::constants::{ODOMETER_STEP_MIN, ODOMETER_STEP_SPAN};

use crate::components::Odometer;
use crate::random::uniform;

/// Advance the odometer of every listed vehicle, in order.
pub fn run<R: Rng + ?Sized>(world: &mut World, entities: &[Entity], rng: &mut R, speed: f64) {
    for &entity in entities {
        if let Ok(odometer) = world.query_one_mut::<&mut Odometer>(entity) {
            let max = ODOMETER_STEP_MIN + ODOMETER_STEP_SPAN;
            let distance = uniform(rng, ODOMETER_STEP_MIN, max);
            odometer.km += distance * speed;
        }
    }
}
