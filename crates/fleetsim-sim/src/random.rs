//! Sampling helpers shared by the systems.
//!
//! Every draw goes through `Rng::gen::<f64>()` so a `StepRng` pinned at 0 or
//! `u64::MAX` drives the model to its lower or upper extremes in tests.

use rand::Rng;

/// True with the given probability.
pub fn chance<R: Rng + ?Sized>(rng: &mut R, probability: f64) -> bool {
    rng.gen::<f64>() < probability
}

/// Uniform value in `[-amplitude, amplitude)`.
pub fn jitter<R: Rng + ?Sized>(rng: &mut R, amplitude: f64) -> f64 {
    (rng.gen::<f64>() - 0.5) * 2.0 * amplitude
}

/// Uniform value in `[min, max)`.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    min + rng.gen::<f64>() * (max - min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_extremes_with_pinned_rng() {
        let mut low = StepRng::new(0, 0);
        assert!(chance(&mut low, 0.01));
        assert_eq!(jitter(&mut low, 1.5), -1.5);
        assert_eq!(uniform(&mut low, 5.0, 20.0), 5.0);

        let mut high = StepRng::new(u64::MAX, 0);
        assert!(!chance(&mut high, 0.99));
        assert!(jitter(&mut high, 1.5) <= 1.5);
        assert!(uniform(&mut high, 5.0, 20.0) <= 20.0);
    }

    #[test]
    fn test_chance_never_fires_at_zero() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert!((0..1_000).all(|_| !chance(&mut rng, 0.0)));
    }
}
