//! Residual autocorrelation check behind
//! [`ForecastModel::suggest_improvements`](crate::ForecastModel::suggest_improvements).

use serde::Serialize;
use tracing::{info, warn};
use tsforge_stats::{autocorrelation, default_acf_lags};

/// Absolute residual autocorrelation above which an order is flagged.
pub const DIAGNOSIS_THRESHOLD: f64 = 0.2;

/// Outcome of the residual autocorrelation check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Diagnosis {
    /// Residual autocorrelation at lag 1.
    pub lag1: f64,
    /// Residual autocorrelation at the last computed lag.
    pub last_lag: f64,
    /// Index of the last computed lag.
    pub last_lag_index: usize,
    /// Lag-1 autocorrelation exceeds the threshold.
    pub increase_ar: bool,
    /// Last-lag autocorrelation exceeds the threshold.
    pub increase_ma: bool,
}

impl Diagnosis {
    /// `true` if neither order is flagged.
    pub fn is_adequate(&self) -> bool {
        !self.increase_ar && !self.increase_ma
    }
}

pub(crate) fn diagnose(residuals: &[f64]) -> Diagnosis {
    let last_lag_index = default_acf_lags(residuals.len());
    let acf = autocorrelation(residuals, last_lag_index);
    let lag1 = acf.get(1).copied().unwrap_or(0.0);
    let last_lag = acf[last_lag_index];

    let diagnosis = Diagnosis {
        lag1,
        last_lag,
        last_lag_index,
        increase_ar: lag1.abs() > DIAGNOSIS_THRESHOLD,
        increase_ma: last_lag.abs() > DIAGNOSIS_THRESHOLD,
    };

    if diagnosis.increase_ar {
        warn!(lag1, "residual autocorrelation at lag 1 is high; consider increasing p");
    }
    if diagnosis.increase_ma {
        warn!(
            last_lag,
            lag = last_lag_index,
            "residual autocorrelation at the last lag is high; consider increasing q"
        );
    }
    if diagnosis.is_adequate() {
        info!(lag1, last_lag, "residuals show no strong autocorrelation");
    }
    diagnosis
}
