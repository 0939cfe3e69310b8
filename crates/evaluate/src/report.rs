//! JSON output structures for evaluation results.

use std::path::Path;

use serde::Serialize;
use tsforge_model::Diagnosis;
use tsforge_stats::Metrics;

use crate::error::EvaluateError;
use crate::residuals::ResidualDiagnostics;

/// Everything known about one fitted model and its hold-out forecast.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    /// Model family, e.g. `"ARIMA"`.
    pub model: String,
    /// Fitted order in display form, e.g. `"(1,1,0)"`.
    pub order: String,
    pub criterion: String,
    pub score: f64,
    pub train_len: usize,
    pub test_len: usize,
    pub forecast: Vec<f64>,
    pub metrics: Metrics,
    pub residuals: ResidualDiagnostics,
    pub diagnosis: Diagnosis,
}

/// Serialize an evaluation report to a JSON string.
pub fn to_json(report: &EvaluationReport) -> Result<String, EvaluateError> {
    serde_json::to_string_pretty(report).map_err(|e| EvaluateError::Serialization {
        reason: e.to_string(),
    })
}

/// Serialize an evaluation report and write it to `path`.
pub fn write_json(report: &EvaluationReport, path: &Path) -> Result<(), EvaluateError> {
    let json = to_json(report)?;
    std::fs::write(path, json).map_err(|e| EvaluateError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
