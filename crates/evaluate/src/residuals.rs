//! Residual whiteness diagnostics.

use serde::Serialize;
use statrs::distribution::{ChiSquared, ContinuousCDF};
use tsforge_stats::{autocorrelation, mean, sd};

use crate::config::EvaluateConfig;

/// Ljung-Box portmanteau test for residual autocorrelation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LjungBox {
    /// Number of lags pooled.
    pub lags: usize,
    /// `Q = n (n + 2) sum_k r_k² / (n - k)`.
    pub statistic: f64,
    /// Upper tail of chi-squared with `lags` degrees of freedom.
    pub p_value: f64,
}

/// Summary of a residual series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResidualDiagnostics {
    pub n: usize,
    pub mean: f64,
    pub sd: f64,
    /// Autocorrelation for lags `0..=acf_lags`.
    pub acf: Vec<f64>,
    /// Half-width `z / sqrt(n)` of the white-noise band.
    pub confidence_bound: f64,
    /// Lags `>= 1` whose autocorrelation falls outside the band.
    pub significant_lags: Vec<usize>,
    pub ljung_box: LjungBox,
}

/// Computes autocorrelation, its confidence band and the Ljung-Box test.
///
/// An empty series yields zero statistics and a Ljung-Box p-value of 1.
pub fn diagnose_residuals(residuals: &[f64], config: &EvaluateConfig) -> ResidualDiagnostics {
    let n = residuals.len();
    let acf = autocorrelation(residuals, config.resolved_acf_lags(n));
    let confidence_bound = if n == 0 {
        0.0
    } else {
        config.confidence_z() / (n as f64).sqrt()
    };
    let significant_lags = acf
        .iter()
        .enumerate()
        .skip(1)
        .filter(|(_, r)| r.abs() > confidence_bound)
        .map(|(k, _)| k)
        .collect();

    ResidualDiagnostics {
        n,
        mean: mean(residuals),
        sd: sd(residuals),
        acf,
        confidence_bound,
        significant_lags,
        ljung_box: ljung_box(residuals, config.ljung_box_lags()),
    }
}

fn ljung_box(residuals: &[f64], lags: usize) -> LjungBox {
    let n = residuals.len();
    let lags = lags.min(n.saturating_sub(1));
    if lags == 0 {
        return LjungBox {
            lags,
            statistic: 0.0,
            p_value: 1.0,
        };
    }

    let acf = autocorrelation(residuals, lags);
    let nf = n as f64;
    let statistic = nf
        * (nf + 2.0)
        * acf
            .iter()
            .enumerate()
            .skip(1)
            .map(|(k, r)| r * r / (nf - k as f64))
            .sum::<f64>();
    let p_value = ChiSquared::new(lags as f64).map_or(1.0, |dist| dist.sf(statistic));

    LjungBox {
        lags,
        statistic,
        p_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_alternating_series_is_not_white() {
        let residuals: Vec<f64> = (0..100).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
        let diag = diagnose_residuals(&residuals, &EvaluateConfig::default());

        assert_eq!(diag.n, 100);
        assert_eq!(diag.acf.len(), 41);
        assert_relative_eq!(diag.confidence_bound, 0.196, epsilon = 1e-12);
        assert!(diag.significant_lags.contains(&1));
        assert!(diag.ljung_box.statistic > 100.0);
        assert!(diag.ljung_box.p_value < 1e-6);
    }

    #[test]
    fn test_ljung_box_by_hand() {
        let residuals = [1.0, -1.0, 2.0, 0.0, -2.0];
        let acf = autocorrelation(&residuals, 2);
        let expected = 5.0 * 7.0 * (acf[1] * acf[1] / 4.0 + acf[2] * acf[2] / 3.0);

        let lb = ljung_box(&residuals, 2);
        assert_eq!(lb.lags, 2);
        assert_relative_eq!(lb.statistic, expected, epsilon = 1e-12);
        // chi-squared(2) upper tail is exp(-x / 2)
        assert_relative_eq!(lb.p_value, (-expected / 2.0).exp(), epsilon = 1e-9);
    }

    #[test]
    fn test_ljung_box_lags_capped() {
        let lb = ljung_box(&[1.0, 2.0, 4.0], 10);
        assert_eq!(lb.lags, 2);
    }

    #[test]
    fn test_empty_residuals() {
        let diag = diagnose_residuals(&[], &EvaluateConfig::default());
        assert_eq!(diag.n, 0);
        assert_eq!(diag.acf, vec![0.0]);
        assert!(diag.significant_lags.is_empty());
        assert_eq!(diag.ljung_box.p_value, 1.0);
    }

    #[test]
    fn test_custom_lags() {
        let residuals: Vec<f64> = (0..50).map(|i| ((i * 7 % 11) as f64) - 5.0).collect();
        let config = EvaluateConfig::default()
            .with_acf_lags(5)
            .with_ljung_box_lags(3);
        let diag = diagnose_residuals(&residuals, &config);
        assert_eq!(diag.acf.len(), 6);
        assert_eq!(diag.ljung_box.lags, 3);
    }
}
