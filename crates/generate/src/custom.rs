//! Closure-driven generator over an arbitrary time grid.

use rand::Rng;
use tracing::debug;

use crate::error::GenerateError;
use crate::noise::draw_noise;

/// Evaluates `f` at every point of `time` and adds `N(0, noise_std)` noise.
///
/// Useful for trend, seasonal or otherwise deterministic shapes that are
/// not expressible as an ARMA recurrence.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`GenerateError::InvalidArgument`] | `f` returns a non-finite value |
/// | [`GenerateError::InvalidNoiseStd`] | `noise_std` is negative or non-finite |
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use tsforge_generate::generate_from_fn;
///
/// let time: Vec<f64> = (0..48).map(f64::from).collect();
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
/// let series = generate_from_fn(&time, |t| 2.0 * t + (t / 6.0).sin(), 0.1, &mut rng).unwrap();
/// assert_eq!(series.len(), 48);
/// ```
pub fn generate_from_fn<F, R>(
    time: &[f64],
    f: F,
    noise_std: f64,
    rng: &mut R,
) -> Result<Vec<f64>, GenerateError>
where
    F: Fn(f64) -> f64,
    R: Rng + ?Sized,
{
    let noise = draw_noise(time.len(), noise_std, rng)?;

    let series = time
        .iter()
        .zip(&noise)
        .map(|(&t, &eps)| {
            let value = f(t);
            if value.is_finite() {
                Ok(value + eps)
            } else {
                Err(GenerateError::InvalidArgument {
                    name: "f",
                    reason: format!("returned {value} at t = {t}"),
                })
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(n = series.len(), "generated series from closure");
    Ok(series)
}
