//! Gaussian innovation draws shared by every generator.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::GenerateError;

/// Draws `n` independent `N(0, noise_std)` values from `rng`.
///
/// The vector is drawn in full before any recurrence runs, so two calls
/// with identically seeded generators produce identical noise.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`GenerateError::InvalidNoiseStd`] | `noise_std` is negative, NaN or infinite |
pub fn draw_noise<R: Rng + ?Sized>(
    n: usize,
    noise_std: f64,
    rng: &mut R,
) -> Result<Vec<f64>, GenerateError> {
    if !noise_std.is_finite() || noise_std < 0.0 {
        return Err(GenerateError::InvalidNoiseStd { std: noise_std });
    }
    let normal =
        Normal::new(0.0, noise_std).map_err(|_| GenerateError::InvalidNoiseStd { std: noise_std })?;
    Ok((0..n).map(|_| normal.sample(rng)).collect())
}
