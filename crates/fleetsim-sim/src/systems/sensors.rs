//! Sensor stepper: drift, noise and rare anomalies for one vehicle.
//!
//! Channels are stepped in a fixed order (engine temperature, brake wear,
//! oil pressure, battery) so a seeded RNG always yields the same trajectory.
//! `speed` scales wear rates only; noise amplitude is constant.

use rand::Rng;

use fleetsim_core::types::Sensors;

use crate::config::SensorModel;
use crate::random::{chance, jitter, uniform};

/// Advance one vehicle's sensors by one tick.
pub fn step<R: Rng + ?Sized>(
    sensors: &mut Sensors,
    rng: &mut R,
    model: &SensorModel,
    speed: f64,
) {
    step_engine_temp(sensors, rng, model);
    step_brake_wear(sensors, rng, model, speed);
    step_oil_pressure(sensors, rng, model, speed);
    step_battery(sensors, rng, model, speed);
}

/// Jitter within the normal band, then an occasional spike above it.
fn step_engine_temp<R: Rng + ?Sized>(sensors: &mut Sensors, rng: &mut R, model: &SensorModel) {
    let noisy = sensors.engine_temp + jitter(rng, model.engine_temp_noise);
    sensors.engine_temp = noisy.clamp(model.engine_temp_min, model.engine_temp_max);

    let spike = model.engine_spike;
    if chance(rng, spike.probability) {
        let spiked = sensors.engine_temp + uniform(rng, spike.min, spike.max);
        sensors.engine_temp = spiked.min(model.engine_temp_ceiling);
    }
}

fn step_brake_wear<R: Rng + ?Sized>(
    sensors: &mut Sensors,
    rng: &mut R,
    model: &SensorModel,
    speed: f64,
) {
    let worn = sensors.brake_wear + model.brake_wear_rate * speed;
    sensors.brake_wear = worn.min(model.brake_wear_max);

    let anomaly = model.brake_anomaly;
    if chance(rng, anomaly.probability) {
        let worn = sensors.brake_wear + uniform(rng, anomaly.min, anomaly.max);
        sensors.brake_wear = worn.min(model.brake_wear_max);
    }
}

fn step_oil_pressure<R: Rng + ?Sized>(
    sensors: &mut Sensors,
    rng: &mut R,
    model: &SensorModel,
    speed: f64,
) {
    let drift = -model.oil_pressure_rate * speed + jitter(rng, model.oil_pressure_noise);
    sensors.oil_pressure =
        (sensors.oil_pressure + drift).clamp(model.oil_pressure_min, model.oil_pressure_max);

    let anomaly = model.oil_anomaly;
    if chance(rng, anomaly.probability) {
        let dropped = sensors.oil_pressure - uniform(rng, anomaly.min, anomaly.max);
        sensors.oil_pressure = dropped.max(model.oil_pressure_floor);
    }
}

fn step_battery<R: Rng + ?Sized>(
    sensors: &mut Sensors,
    rng: &mut R,
    model: &SensorModel,
    speed: f64,
) {
    let drained = sensors.battery - model.battery_rate * speed;
    sensors.battery = drained.clamp(model.battery_min, model.battery_max);

    let anomaly = model.battery_anomaly;
    if chance(rng, anomaly.probability) {
        let dropped = sensors.battery - uniform(rng, anomaly.min, anomaly.max);
        sensors.battery = dropped.max(model.battery_floor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_all_anomalies_fire_at_lower_extreme() {
        // gen::<f64>() == 0.0: every gate passes, every magnitude is minimal.
        let mut rng = StepRng::new(0, 0);
        let mut sensors = Sensors::new(90.0, 50.0, 12.5, 40.0);
        step(&mut sensors, &mut rng, &SensorModel::default(), 1.0);

        assert!(approx(sensors.engine_temp, 88.5 + 5.0));
        assert!(approx(sensors.brake_wear, 50.1 + 5.0));
        assert!(approx(sensors.oil_pressure, 40.0 - 0.05 - 1.0 - 5.0));
        assert!(approx(sensors.battery, 12.499 - 0.2));
    }

    #[test]
    fn test_no_anomalies_at_upper_extreme() {
        let mut rng = StepRng::new(u64::MAX, 0);
        let mut sensors = Sensors::new(90.0, 50.0, 12.5, 40.0);
        step(&mut sensors, &mut rng, &SensorModel::default(), 1.0);

        // Only drift and maximal positive noise.
        assert!(approx(sensors.engine_temp, 91.5));
        assert!(approx(sensors.brake_wear, 50.1));
        assert!(approx(sensors.oil_pressure, 40.0 - 0.05 + 1.0));
        assert!(approx(sensors.battery, 12.499));
    }

    #[test]
    fn test_speed_scales_wear_not_noise() {
        let model = SensorModel::without_anomalies();
        let mut slow = Sensors::new(90.0, 10.0, 12.5, 40.0);
        let mut fast = slow;

        step(&mut slow, &mut StepRng::new(0, 0), &model, 1.0);
        step(&mut fast, &mut StepRng::new(0, 0), &model, 10.0);

        let slow_wear = slow.brake_wear - 10.0;
        assert!(approx(fast.brake_wear - 10.0, 10.0 * slow_wear));
        assert!(approx(fast.battery, 12.5 - 0.01));
        // Same jitter at both speeds.
        assert!(approx(slow.engine_temp, fast.engine_temp));
        assert!(approx(40.0 - fast.oil_pressure, 0.5 + 1.0));
    }

    #[test]
    fn test_spike_capped_at_ceiling() {
        let mut model = SensorModel::default();
        model.engine_spike.min = 50.0;
        model.engine_spike.max = 60.0;
        let mut sensors = Sensors::new(95.0, 0.0, 12.5, 40.0);
        step(&mut sensors, &mut StepRng::new(0, 0), &model, 1.0);
        assert_eq!(sensors.engine_temp, 110.0);
    }

    #[test]
    fn test_engine_temp_pulled_into_band() {
        // Dashboard fleets start below the normal band.
        let model = SensorModel::without_anomalies();
        let mut sensors = Sensors::new(78.0, 0.0, 12.5, 40.0);
        step(&mut sensors, &mut ChaCha8Rng::seed_from_u64(3), &model, 1.0);
        assert_eq!(sensors.engine_temp, 85.0);
    }

    #[test]
    fn test_brake_wear_saturates() {
        let mut rng = StepRng::new(0, 0);
        let mut sensors = Sensors::new(90.0, 99.0, 12.5, 40.0);
        step(&mut sensors, &mut rng, &SensorModel::default(), 10.0);
        assert_eq!(sensors.brake_wear, 100.0);
    }

    #[test]
    fn test_floors_hold_under_repeated_anomalies() {
        let mut rng = StepRng::new(0, 0);
        let mut sensors = Sensors::new(90.0, 0.0, 12.8, 50.0);
        for _ in 0..500 {
            step(&mut sensors, &mut rng, &SensorModel::default(), 10.0);
        }
        // Drift re-clamps to the band every tick before the anomaly applies.
        assert_eq!(sensors.oil_pressure, 20.0);
        assert!(approx(sensors.battery, 11.7 - 0.2));
        assert_eq!(sensors.brake_wear, 100.0);
        assert!(sensors.engine_temp <= 110.0);
    }
}
