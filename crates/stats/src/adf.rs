//! Augmented Dickey-Fuller unit-root test with a constant term.
//!
//! The regression for `k` augmentation lags is
//!
//! ```text
//! Δy[t] = γ·y[t-1] + Σ_{i=1..k} δ_i·Δy[t-i] + c + e[t]
//! ```
//!
//! and the statistic is the OLS t-value of `γ`. The number of lags is chosen
//! by AIC over a common sample; ties go to the smaller lag. p-values use the
//! MacKinnon (1994) response-surface approximation and critical values the
//! MacKinnon (2010) finite-sample table for a single series with constant.

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use statrs::function::erf::erfc;
use tracing::debug;

use crate::error::StatsError;
use crate::ols::{OlsFit, ols};
use crate::transform::difference;

/// p-value at or below which a series is judged stationary.
pub const STATIONARITY_LEVEL: f64 = 0.05;

/// Shortest series the test accepts.
const MIN_OBSERVATIONS: usize = 4;

// MacKinnon (1994) surface for the constant-only case, one series.
const TAU_MAX: f64 = 2.74;
const TAU_MIN: f64 = -18.83;
const TAU_STAR: f64 = -1.61;
const TAU_SMALL_P: [f64; 3] = [2.1659, 1.4412, 0.038269];
const TAU_LARGE_P: [f64; 4] = [1.7339, 0.93202, -0.12745, -0.010368];

// MacKinnon (2010) critical-value coefficients in powers of 1/nobs.
const CRIT_1: [f64; 4] = [-3.43035, -6.5393, -16.786, -79.433];
const CRIT_5: [f64; 4] = [-2.86154, -2.8903, -4.234, -40.040];
const CRIT_10: [f64; 4] = [-2.56677, -1.5384, -2.809, 0.0];

/// Critical values of the ADF statistic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriticalValues {
    #[serde(rename = "1%")]
    pub one_percent: f64,
    #[serde(rename = "5%")]
    pub five_percent: f64,
    #[serde(rename = "10%")]
    pub ten_percent: f64,
}

/// Outcome of [`stationarity_test`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StationarityTest {
    /// t-value of the lagged level coefficient.
    pub statistic: f64,
    /// Approximate p-value of the unit-root null.
    pub p_value: f64,
    /// Augmentation lags selected by AIC.
    pub used_lag: usize,
    /// Observations in the final regression.
    pub n_obs: usize,
    pub critical_values: CriticalValues,
}

impl StationarityTest {
    /// `p_value <= 0.05`.
    pub fn is_stationary(&self) -> bool {
        self.p_value <= STATIONARITY_LEVEL
    }
}

/// Runs the augmented Dickey-Fuller test on `series`.
///
/// The maximum lag is `ceil(12·(n/100)^¼)`, capped at `n/2 - 2`. The result
/// is fully deterministic.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`StatsError::InsufficientData`] | fewer than 4 observations |
/// | [`StatsError::NonFiniteData`] | any NaN or infinite value |
/// | [`StatsError::ConstantData`] | all values equal |
/// | [`StatsError::SingularRegression`] | no lag yields an invertible regression |
#[tracing::instrument(skip(series), fields(n = series.len()))]
pub fn stationarity_test(series: &[f64]) -> Result<StationarityTest, StatsError> {
    let n = series.len();
    if n < MIN_OBSERVATIONS {
        return Err(StatsError::InsufficientData {
            n,
            min: MIN_OBSERVATIONS,
        });
    }
    if series.iter().any(|x| !x.is_finite()) {
        return Err(StatsError::NonFiniteData);
    }
    let (lo, hi) = series
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| (lo.min(x), hi.max(x)));
    if lo == hi {
        return Err(StatsError::ConstantData);
    }

    let diffs = difference(series, 1);
    let max_lag = max_lag(n);
    let common_nobs = diffs.len() - max_lag;

    let mut best: Option<(f64, usize)> = None;
    for lags in 0..=max_lag {
        let Ok(fit) = regression(series, &diffs, common_nobs, lags) else {
            continue;
        };
        let aic = fit.aic();
        if best.is_none_or(|(best_aic, _)| aic < best_aic) {
            best = Some((aic, lags));
        }
    }
    let (_, used_lag) = best.ok_or(StatsError::SingularRegression {
        rows: common_nobs,
        cols: max_lag + 2,
    })?;

    let n_obs = diffs.len() - used_lag;
    let fit = regression(series, &diffs, n_obs, used_lag)?;
    let statistic = fit.t_value(0);
    let p_value = mackinnon_p_value(statistic);

    debug!(statistic, p_value, used_lag, max_lag, "ADF test");

    Ok(StationarityTest {
        statistic,
        p_value,
        used_lag,
        n_obs,
        critical_values: critical_values(n_obs),
    })
}

/// `ceil(12·(n/100)^¼)` capped at `n/2 - 2`.
fn max_lag(n: usize) -> usize {
    let schwert = (12.0 * (n as f64 / 100.0).powf(0.25)).ceil() as usize;
    schwert.min((n / 2).saturating_sub(2))
}

/// ADF regression on the last `nobs` differences with `lags` augmentation
/// terms. Columns: lagged level, lagged differences, constant.
fn regression(
    series: &[f64],
    diffs: &[f64],
    nobs: usize,
    lags: usize,
) -> Result<OlsFit, StatsError> {
    let offset = diffs.len() - nobs;
    let design = Array2::from_shape_fn((nobs, lags + 2), |(row, col)| {
        let t = offset + row;
        match col {
            0 => series[t],
            c if c <= lags => diffs[t - c],
            _ => 1.0,
        }
    });
    let response = Array1::from(diffs[offset..].to_vec());
    ols(&design, &response)
}

/// Approximate p-value of an ADF statistic (constant, one series).
pub(crate) fn mackinnon_p_value(statistic: f64) -> f64 {
    if statistic > TAU_MAX {
        return 1.0;
    }
    if statistic < TAU_MIN {
        return 0.0;
    }
    let z = if statistic <= TAU_STAR {
        polyval(&TAU_SMALL_P, statistic)
    } else {
        polyval(&TAU_LARGE_P, statistic)
    };
    standard_normal_cdf(z)
}

fn critical_values(nobs: usize) -> CriticalValues {
    let inv = 1.0 / nobs as f64;
    CriticalValues {
        one_percent: polyval(&CRIT_1, inv),
        five_percent: polyval(&CRIT_5, inv),
        ten_percent: polyval(&CRIT_10, inv),
    }
}

/// `c[0] + c[1]·x + c[2]·x² + …`
fn polyval(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

fn standard_normal_cdf(z: f64) -> f64 {
    0.5 * erfc(-z / std::f64::consts::SQRT_2)
}
