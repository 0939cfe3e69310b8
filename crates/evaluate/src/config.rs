//! Evaluation configuration.

use tsforge_stats::default_acf_lags;

/// Configuration for residual diagnostics.
#[derive(Debug, Clone)]
pub struct EvaluateConfig {
    acf_lags: Option<usize>,
    ljung_box_lags: usize,
    confidence_z: f64,
}

impl Default for EvaluateConfig {
    fn default() -> Self {
        Self {
            acf_lags: None,
            ljung_box_lags: 10,
            confidence_z: 1.96,
        }
    }
}

impl EvaluateConfig {
    /// Set the number of autocorrelation lags. Unset means `min(40, n - 1)`.
    pub fn with_acf_lags(mut self, lags: usize) -> Self {
        self.acf_lags = Some(lags);
        self
    }

    /// Set the number of lags pooled by the Ljung-Box statistic.
    pub fn with_ljung_box_lags(mut self, lags: usize) -> Self {
        self.ljung_box_lags = lags;
        self
    }

    /// Set the normal quantile for the autocorrelation confidence band.
    pub fn with_confidence_z(mut self, z: f64) -> Self {
        self.confidence_z = z;
        self
    }

    /// Returns the configured autocorrelation lags, if any.
    pub fn acf_lags(&self) -> Option<usize> {
        self.acf_lags
    }

    /// Returns the Ljung-Box lag count.
    pub fn ljung_box_lags(&self) -> usize {
        self.ljung_box_lags
    }

    /// Returns the confidence band quantile.
    pub fn confidence_z(&self) -> f64 {
        self.confidence_z
    }

    /// Autocorrelation lags for a residual series of length `n`, never
    /// beyond `n - 1`.
    pub fn resolved_acf_lags(&self, n: usize) -> usize {
        let max = n.saturating_sub(1);
        self.acf_lags.map_or(default_acf_lags(n), |lags| lags.min(max))
    }
}
