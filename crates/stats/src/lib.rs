//! # tsforge-stats
//!
//! Statistical helpers shared by the forecasting and evaluation crates:
//! descriptive moments, differencing and its inverse, forecast accuracy
//! metrics, sample autocorrelation and the augmented Dickey-Fuller
//! stationarity test.
//!
//! Degenerate inputs to metrics and autocorrelation return `0.0` rather than
//! an error. Only [`stationarity_test`] is fallible.

mod acf;
mod adf;
mod error;
mod metrics;
mod ols;
mod transform;

pub use acf::{autocorrelation, default_acf_lags};
pub use adf::{CriticalValues, STATIONARITY_LEVEL, StationarityTest, stationarity_test};
pub use error::StatsError;
pub use metrics::{
    Metrics, mean_absolute_error, mean_squared_error, r2_score, root_mean_squared_error,
};
pub use transform::{cumulative_sum, difference, undifference};

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Sample variance with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let m = mean(data);
    data.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / (n - 1) as f64
}

/// Sample standard deviation with N-1 denominator.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}
