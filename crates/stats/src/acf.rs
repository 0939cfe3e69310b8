//! Sample autocorrelation.

/// Default number of lags for residual diagnostics: `min(40, n - 1)`.
pub fn default_acf_lags(n: usize) -> usize {
    40.min(n.saturating_sub(1))
}

/// Sample autocorrelation for lags `0..=max_lag`.
///
/// Uses the biased estimator
///
/// ```text
/// r_k = sum_{t<n-k} (x[t] - m)(x[t+k] - m) / sum_t (x[t] - m)²
/// ```
///
/// so `r_0 == 1` for any non-constant series. When the denominator is zero
/// (empty or constant input) every entry is `0.0`. Lags at or beyond `n`
/// are `0.0`.
pub fn autocorrelation(series: &[f64], max_lag: usize) -> Vec<f64> {
    let mut acf = vec![0.0; max_lag + 1];
    let n = series.len();
    if n == 0 {
        return acf;
    }

    let m = crate::mean(series);
    let centred: Vec<f64> = series.iter().map(|x| x - m).collect();
    let denom: f64 = centred.iter().map(|c| c * c).sum();
    if denom == 0.0 {
        return acf;
    }

    for (k, slot) in acf.iter_mut().enumerate().take(n.min(max_lag + 1)) {
        let num: f64 = centred
            .iter()
            .zip(&centred[k..])
            .map(|(a, b)| a * b)
            .sum();
        *slot = num / denom;
    }
    acf
}
