//! Forecast values returned by [`ForecastModel::predict`](crate::ForecastModel::predict).

use serde::Serialize;

use crate::error::ModelError;

/// Point forecasts for steps `1..=horizon` past the end of the training
/// series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastResult {
    values: Vec<f64>,
    horizon: usize,
}

impl ForecastResult {
    /// Wraps `values`, which must hold exactly one value per step.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::ForecastLength`] if `values.len() != horizon`.
    pub fn new(values: Vec<f64>, horizon: usize) -> Result<Self, ModelError> {
        if values.len() != horizon {
            return Err(ModelError::ForecastLength {
                len: values.len(),
                horizon,
            });
        }
        Ok(Self { values, horizon })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn horizon(&self) -> usize {
        self.horizon
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}
