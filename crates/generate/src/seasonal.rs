//! Seasonal SARIMAX(p,d,q)(P,D,Q,s) generator.

use rand::Rng;
use tracing::debug;

use crate::error::GenerateError;
use crate::noise::draw_noise;
use crate::process::{ar_term, ma_term};

/// Generates `n` points of a seasonal ARIMA process.
///
/// `seasonal_order` is the raw `[P, D, Q, s]` shape. The base series starts
/// at zero and receives `d` rounds of first differencing with `noise[0]` as
/// the prepended value. From `t = max(p, q, P + Q)` onward
///
/// ```text
/// x[t] = AR + MA + sum_{j<P} P * x[t-s-j] + sum_{j<Q} Q * noise[t-s-j] + noise[t]
/// ```
///
/// Seasonal lags that fall before the start of the series contribute
/// nothing. `D` is accepted for shape compatibility but not applied.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`GenerateError::InvalidArgument`] | `seasonal_order` has fewer than 4 entries |
/// | [`GenerateError::InvalidArgument`] | `s == 0` while `P + Q > 0` |
/// | [`GenerateError::InvalidNoiseStd`] | `noise_std` is negative or non-finite |
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use tsforge_generate::generate_sarimax;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(3);
/// let series = generate_sarimax(120, &[0.4], 0, &[0.2], &[1, 0, 1, 12], 1.0, &mut rng).unwrap();
/// assert_eq!(series.len(), 120);
/// ```
pub fn generate_sarimax<R: Rng + ?Sized>(
    n: usize,
    ar_params: &[f64],
    d: usize,
    ma_params: &[f64],
    seasonal_order: &[usize],
    noise_std: f64,
    rng: &mut R,
) -> Result<Vec<f64>, GenerateError> {
    let &[seasonal_p, _seasonal_d, seasonal_q, s, ..] = seasonal_order else {
        return Err(GenerateError::InvalidArgument {
            name: "seasonal_order",
            reason: format!(
                "expected 4 entries [P, D, Q, s], got {}",
                seasonal_order.len()
            ),
        });
    };
    if s == 0 && seasonal_p + seasonal_q > 0 {
        return Err(GenerateError::InvalidArgument {
            name: "seasonal_order",
            reason: "season length s must be positive when P or Q is non-zero".to_string(),
        });
    }

    let noise = draw_noise(n, noise_std, rng)?;
    let p = ar_params.len();
    let q = ma_params.len();
    let mut series = vec![0.0; n];

    if n > 0 {
        for _ in 0..d {
            series = difference_with_prepend(&series, noise[0]);
        }
    }

    let start = p.max(q).max(seasonal_p + seasonal_q);
    let sar_weight = seasonal_p as f64;
    let sma_weight = seasonal_q as f64;

    for t in start..n {
        let seasonal_ar: f64 = (0..seasonal_p)
            .filter_map(|j| t.checked_sub(s + j))
            .map(|idx| sar_weight * series[idx])
            .sum();
        let seasonal_ma: f64 = (0..seasonal_q)
            .filter_map(|j| t.checked_sub(s + j))
            .map(|idx| sma_weight * noise[idx])
            .sum();

        series[t] = ar_term(ar_params, &series, t)
            + ma_term(ma_params, &noise, t)
            + seasonal_ar
            + seasonal_ma
            + noise[t];
    }

    debug!(n, p, d, q, seasonal_p, seasonal_q, s, "generated SARIMAX series");
    Ok(series)
}

/// First difference that keeps the input length: `out[0] = x[0] - prepend`.
fn difference_with_prepend(series: &[f64], prepend: f64) -> Vec<f64> {
    let mut prev = prepend;
    series
        .iter()
        .map(|&x| {
            let diff = x - prev;
            prev = x;
            diff
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn noise(n: usize, seed: u64) -> Vec<f64> {
        draw_noise(n, 1.0, &mut StdRng::seed_from_u64(seed)).unwrap()
    }

    #[test]
    fn short_seasonal_order_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = generate_sarimax(50, &[0.5], 0, &[], &[1, 0, 1], 1.0, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::InvalidArgument {
                name: "seasonal_order",
                ..
            }
        ));
    }

    #[test]
    fn zero_period_with_seasonal_terms_rejected() {
        let mut rng = StdRng::seed_from_u64(2);
        let err = generate_sarimax(50, &[], 0, &[], &[1, 0, 0, 0], 1.0, &mut rng).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidArgument { .. }));
    }

    #[test]
    fn zero_period_without_seasonal_terms_allowed() {
        let mut rng = StdRng::seed_from_u64(3);
        let series = generate_sarimax(30, &[0.5], 0, &[], &[0, 0, 0, 0], 1.0, &mut rng).unwrap();
        assert_eq!(series.len(), 30);
    }

    #[test]
    fn non_seasonal_reduces_to_arma_core() {
        let eps = noise(40, 4);
        let series =
            generate_sarimax(40, &[0.5], 0, &[0.3], &[0, 0, 0, 12], 1.0, &mut StdRng::seed_from_u64(4))
                .unwrap();
        assert_eq!(series[0], 0.0);
        for t in 1..40 {
            let expected = 0.5 * series[t - 1] + 0.3 * eps[t - 1] + eps[t];
            assert_abs_diff_eq!(series[t], expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn seasonal_ar_looks_back_one_period() {
        let s = 4;
        let eps = noise(30, 5);
        let series =
            generate_sarimax(30, &[], 0, &[], &[1, 0, 0, s], 1.0, &mut StdRng::seed_from_u64(5))
                .unwrap();
        // start = P + Q = 1; lags before index 0 contribute nothing
        assert_eq!(series[0], 0.0);
        for t in 1..s {
            assert_abs_diff_eq!(series[t], eps[t], epsilon = 1e-12);
        }
        for t in s..30 {
            assert_abs_diff_eq!(series[t], series[t - s] + eps[t], epsilon = 1e-12);
        }
    }

    #[test]
    fn seasonal_ma_weights_by_order() {
        let s = 3;
        let eps = noise(20, 6);
        let series =
            generate_sarimax(20, &[], 0, &[], &[0, 0, 2, s], 1.0, &mut StdRng::seed_from_u64(6))
                .unwrap();
        for t in 5..20 {
            let expected = 2.0 * eps[t - s] + 2.0 * eps[t - s - 1] + eps[t];
            assert_abs_diff_eq!(series[t], expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn differencing_seeds_warm_up() {
        // p = 2 keeps the first two differenced positions untouched
        let eps = noise(10, 7);
        let series =
            generate_sarimax(10, &[0.0, 0.0], 1, &[], &[0, 0, 0, 1], 1.0, &mut StdRng::seed_from_u64(7))
                .unwrap();
        assert_abs_diff_eq!(series[0], -eps[0], epsilon = 1e-12);
        assert_eq!(series[1], 0.0);
        for t in 2..10 {
            assert_abs_diff_eq!(series[t], eps[t], epsilon = 1e-12);
        }
    }

    #[test]
    fn difference_with_prepend_keeps_length() {
        assert_eq!(
            difference_with_prepend(&[1.0, 3.0, 6.0], 0.5),
            vec![0.5, 2.0, 3.0]
        );
        assert!(difference_with_prepend(&[], 1.0).is_empty());
    }
}
