//! Non-seasonal process generators: AR(p), MA(q), ARMA(p,q), ARIMA(p,d,q).
//!
//! All recurrences read already-generated entries of the output series
//! itself, so the warm-up positions feed every later value.

use rand::Rng;
use tracing::debug;

use crate::error::GenerateError;
use crate::noise::draw_noise;

/// Generates `n` points of an AR(p) process.
///
/// ```text
/// x[t] = noise[t]                                   t < p
/// x[t] = sum_j ar[j] * x[t-1-j] + noise[t]          t >= p
/// ```
///
/// `ar_params[0]` weights lag 1.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidNoiseStd`] for a negative or non-finite
/// `noise_std`.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use tsforge_generate::generate_ar;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let series = generate_ar(100, &[0.5, -0.3], 1.0, &mut rng).unwrap();
/// assert_eq!(series.len(), 100);
/// ```
pub fn generate_ar<R: Rng + ?Sized>(
    n: usize,
    ar_params: &[f64],
    noise_std: f64,
    rng: &mut R,
) -> Result<Vec<f64>, GenerateError> {
    let noise = draw_noise(n, noise_std, rng)?;
    let p = ar_params.len();
    let mut series = vec![0.0; n];

    for t in 0..n {
        series[t] = if t < p {
            noise[t]
        } else {
            ar_term(ar_params, &series, t) + noise[t]
        };
    }

    debug!(n, p, "generated AR series");
    Ok(series)
}

/// Generates `n` points of an MA(q) process.
///
/// ```text
/// x[0] = noise[0]
/// x[t] = noise[t] + sum_{j=1..min(q,t)} ma[j-1] * noise[t-j]
/// ```
///
/// # Errors
///
/// Returns [`GenerateError::InvalidNoiseStd`] for a negative or non-finite
/// `noise_std`.
pub fn generate_ma<R: Rng + ?Sized>(
    n: usize,
    ma_params: &[f64],
    noise_std: f64,
    rng: &mut R,
) -> Result<Vec<f64>, GenerateError> {
    let noise = draw_noise(n, noise_std, rng)?;
    let q = ma_params.len();
    let mut series = vec![0.0; n];

    for t in 0..n {
        let mut val = noise[t];
        for j in 1..=q.min(t) {
            val += ma_params[j - 1] * noise[t - j];
        }
        series[t] = val;
    }

    debug!(n, q, "generated MA series");
    Ok(series)
}

/// Generates `n` points of an ARMA(p,q) process.
///
/// Positions before `max(p, q) + 1` stay at zero; from there on
///
/// ```text
/// x[t] = sum_j ar[j] * x[t-1-j] + sum_j ma[j] * noise[t-1-j] + noise[t]
/// ```
///
/// # Errors
///
/// Returns [`GenerateError::InvalidNoiseStd`] for a negative or non-finite
/// `noise_std`.
pub fn generate_arma<R: Rng + ?Sized>(
    n: usize,
    ar_params: &[f64],
    ma_params: &[f64],
    noise_std: f64,
    rng: &mut R,
) -> Result<Vec<f64>, GenerateError> {
    let noise = draw_noise(n, noise_std, rng)?;
    let start = ar_params.len().max(ma_params.len()) + 1;
    let mut series = vec![0.0; n];

    for t in start..n {
        series[t] = ar_term(ar_params, &series, t) + ma_term(ma_params, &noise, t) + noise[t];
    }

    debug!(n, p = ar_params.len(), q = ma_params.len(), "generated ARMA series");
    Ok(series)
}

/// Generates `n` points of an ARIMA(p,d,q) process.
///
/// The first `d` positions are seeded with noise, the ARMA recurrence runs
/// from `t = max(p, q)`, and the result is cumulatively summed `d` times.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidNoiseStd`] for a negative or non-finite
/// `noise_std`.
pub fn generate_arima<R: Rng + ?Sized>(
    n: usize,
    ar_params: &[f64],
    d: usize,
    ma_params: &[f64],
    noise_std: f64,
    rng: &mut R,
) -> Result<Vec<f64>, GenerateError> {
    let noise = draw_noise(n, noise_std, rng)?;
    let start = ar_params.len().max(ma_params.len());
    let mut series = vec![0.0; n];

    series[..d.min(n)].copy_from_slice(&noise[..d.min(n)]);

    for t in start..n {
        series[t] = ar_term(ar_params, &series, t) + ma_term(ma_params, &noise, t) + noise[t];
    }

    for _ in 0..d {
        series = integrate(&series);
    }

    debug!(n, p = ar_params.len(), d, q = ma_params.len(), "generated ARIMA series");
    Ok(series)
}

/// `sum_j ar[j] * series[t-1-j]`; callers guarantee `t >= ar.len()`.
pub(crate) fn ar_term(ar_params: &[f64], series: &[f64], t: usize) -> f64 {
    ar_params
        .iter()
        .enumerate()
        .map(|(j, phi)| phi * series[t - 1 - j])
        .sum()
}

/// `sum_j ma[j] * noise[t-1-j]`; callers guarantee `t >= ma.len()`.
pub(crate) fn ma_term(ma_params: &[f64], noise: &[f64], t: usize) -> f64 {
    ma_params
        .iter()
        .enumerate()
        .map(|(j, theta)| theta * noise[t - 1 - j])
        .sum()
}

/// Running total of `series`.
fn integrate(series: &[f64]) -> Vec<f64> {
    series
        .iter()
        .scan(0.0, |acc, &x| {
            *acc += x;
            Some(*acc)
        })
        .collect()
}
