use rand::Rng;

use super::{lerp, Vector2D, TAU};

/// Uniform sample in `[min, max)`.
/// Logs a warning and returns `min` when the range is empty.
fn gen_range_or_min<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    if !(min < max) {
        log::warn!("empty random range: min={}, max={}", min, max);
        return min;
    }

    if (max - min).is_finite() {
        return rng.gen_range(min..max);
    }

    // width overflows f64; interpolating keeps every term within [min, max]
    let sample = lerp(min, max, rng.gen::<f64>());
    if sample < max {
        sample
    } else {
        min
    }
}

impl Vector2D {
    /// Each component drawn uniformly from `[min, max)`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> Self {
        let x = gen_range_or_min(rng, min, max);
        let y = gen_range_or_min(rng, min, max);
        Self::new(x, y)
    }

    /// [`random`](Self::random) over `[-1, 1)`.
    pub fn random_default<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::random(rng, -1.0, 1.0)
    }

    /// Unit vector at a uniformly random angle in `[0, 2π)`.
    pub fn random_unit<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_angle(rng.gen_range(0.0..TAU))
    }
}
