//! Forecast accuracy metrics.
//!
//! Every metric returns `0.0` when the inputs differ in length or are empty.

use serde::{Deserialize, Serialize};

/// Mean of `(actual - predicted)²`.
pub fn mean_squared_error(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return 0.0;
    }
    actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| (a - p) * (a - p))
        .sum::<f64>()
        / actual.len() as f64
}

/// Square root of [`mean_squared_error`].
pub fn root_mean_squared_error(actual: &[f64], predicted: &[f64]) -> f64 {
    mean_squared_error(actual, predicted).sqrt()
}

/// Mean of `|actual - predicted|`.
pub fn mean_absolute_error(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return 0.0;
    }
    actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| (a - p).abs())
        .sum::<f64>()
        / actual.len() as f64
}

/// Coefficient of determination `1 - SS_res / SS_tot`.
///
/// A constant `actual` has no variance to explain: the score is `1.0` for an
/// exact prediction and `0.0` otherwise.
pub fn r2_score(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return 0.0;
    }
    let mean = crate::mean(actual);
    let ss_tot: f64 = actual.iter().map(|a| (a - mean) * (a - mean)).sum();
    let ss_res: f64 = actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| (a - p) * (a - p))
        .sum();

    if ss_tot == 0.0 {
        return if ss_res == 0.0 { 1.0 } else { 0.0 };
    }
    1.0 - ss_res / ss_tot
}

/// The four accuracy metrics reported for a forecast.
///
/// Serialised with the keys `MSE`, `RMSE`, `MAE` and `R2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    #[serde(rename = "MSE")]
    pub mse: f64,
    #[serde(rename = "RMSE")]
    pub rmse: f64,
    #[serde(rename = "MAE")]
    pub mae: f64,
    #[serde(rename = "R2")]
    pub r2: f64,
}

impl Metrics {
    /// Metric names in reporting order.
    pub const NAMES: [&'static str; 4] = ["MSE", "RMSE", "MAE", "R2"];

    /// Computes all four metrics for `predicted` against `actual`.
    pub fn compute(actual: &[f64], predicted: &[f64]) -> Self {
        let mse = mean_squared_error(actual, predicted);
        Self {
            mse,
            rmse: mse.sqrt(),
            mae: mean_absolute_error(actual, predicted),
            r2: r2_score(actual, predicted),
        }
    }

    /// Looks up a metric by its reported name.
    pub fn get(&self, name: &str) -> Option<f64> {
        match name {
            "MSE" => Some(self.mse),
            "RMSE" => Some(self.rmse),
            "MAE" => Some(self.mae),
            "R2" => Some(self.r2),
            _ => None,
        }
    }

    /// `(name, value)` pairs in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> {
        [self.mse, self.rmse, self.mae, self.r2]
            .into_iter()
            .zip(Self::NAMES)
            .map(|(value, name)| (name, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const ACTUAL: [f64; 4] = [1.0, 2.0, 3.0, 4.0];
    const PREDICTED: [f64; 4] = [1.5, 2.0, 2.0, 5.0];

    #[test]
    fn mse_and_rmse() {
        // squared errors 0.25, 0, 1, 1
        assert_abs_diff_eq!(mean_squared_error(&ACTUAL, &PREDICTED), 0.5625, epsilon = 1e-12);
        assert_abs_diff_eq!(
            root_mean_squared_error(&ACTUAL, &PREDICTED),
            0.75,
            epsilon = 1e-12
        );
    }

    #[test]
    fn mae() {
        assert_abs_diff_eq!(mean_absolute_error(&ACTUAL, &PREDICTED), 0.625, epsilon = 1e-12);
    }

    #[test]
    fn r2() {
        // SS_tot = 5, SS_res = 2.25
        assert_abs_diff_eq!(r2_score(&ACTUAL, &PREDICTED), 0.55, epsilon = 1e-12);
    }

    #[test]
    fn perfect_prediction() {
        assert_eq!(mean_squared_error(&ACTUAL, &ACTUAL), 0.0);
        assert_eq!(mean_absolute_error(&ACTUAL, &ACTUAL), 0.0);
        assert_eq!(r2_score(&ACTUAL, &ACTUAL), 1.0);
    }

    #[test]
    fn degenerate_inputs_are_zero() {
        assert_eq!(mean_squared_error(&[], &[]), 0.0);
        assert_eq!(mean_absolute_error(&[1.0], &[1.0, 2.0]), 0.0);
        assert_eq!(r2_score(&[1.0, 2.0], &[1.0]), 0.0);
        assert_eq!(root_mean_squared_error(&[], &[]), 0.0);
    }

    #[test]
    fn r2_constant_actual() {
        assert_eq!(r2_score(&[2.0, 2.0, 2.0], &[2.0, 2.0, 2.0]), 1.0);
        assert_eq!(r2_score(&[2.0, 2.0, 2.0], &[2.0, 2.5, 2.0]), 0.0);
    }

    #[test]
    fn metrics_compute_and_lookup() {
        let m = Metrics::compute(&ACTUAL, &PREDICTED);
        assert_abs_diff_eq!(m.get("MSE").unwrap(), 0.5625, epsilon = 1e-12);
        assert_abs_diff_eq!(m.get("RMSE").unwrap(), 0.75, epsilon = 1e-12);
        assert_abs_diff_eq!(m.get("MAE").unwrap(), 0.625, epsilon = 1e-12);
        assert_abs_diff_eq!(m.get("R2").unwrap(), 0.55, epsilon = 1e-12);
        assert!(m.get("MAPE").is_none());
    }

    #[test]
    fn metrics_iterate_in_order() {
        let m = Metrics::compute(&ACTUAL, &ACTUAL);
        let names: Vec<&str> = m.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["MSE", "RMSE", "MAE", "R2"]);
    }

    #[test]
    fn metrics_serialize_with_report_names() {
        let m = Metrics::compute(&ACTUAL, &PREDICTED);
        let json = serde_json::to_string(&m).unwrap();
        assert!(json.contains("\"MSE\":0.5625"));
        assert!(json.contains("\"RMSE\":0.75"));
        assert!(json.contains("\"MAE\":0.625"));
        assert!(json.contains("\"R2\":"));
    }
}
