//! # tsforge-evaluate
//!
//! Scores a fitted [`ForecastModel`] against its hold-out partition and
//! checks whether its residuals look like white noise.
//!
//! ```mermaid
//! flowchart LR
//!     M[fitted model] -->|predict test horizon| F[forecast]
//!     F --> MT[Metrics]
//!     M -->|residuals| RD[ResidualDiagnostics]
//!     M -->|suggest_improvements| D[Diagnosis]
//!     MT & RD & D --> R[EvaluationReport] --> J[JSON]
//! ```

mod config;
mod error;
mod report;
mod residuals;

use tracing::info;
use tsforge_model::{ForecastModel, ModelError};

pub use config::EvaluateConfig;
pub use error::EvaluateError;
pub use report::{EvaluationReport, to_json, write_json};
pub use residuals::{LjungBox, ResidualDiagnostics, diagnose_residuals};

/// Evaluate a fitted model on its test partition.
///
/// Forecasts as many steps as the test partition holds, computes accuracy
/// metrics against it, and attaches residual diagnostics and the model's
/// own improvement suggestions.
///
/// # Errors
///
/// Returns [`EvaluateError::Model`] if the model is not split and fitted.
#[tracing::instrument(skip(model, config), fields(model = model.name()))]
pub fn evaluate_model<M: ForecastModel>(
    model: &M,
    config: &EvaluateConfig,
) -> Result<EvaluationReport, EvaluateError> {
    let (train, test) = model.train().zip(model.test()).ok_or(ModelError::InvalidState {
        operation: "evaluate",
        missing: "split",
    })?;

    let forecast = model.predict(test.len())?;
    let metrics = model.evaluate(test, forecast.values())?;
    let residuals = diagnose_residuals(model.residuals()?, config);
    let diagnosis = model.suggest_improvements()?;
    let order = model
        .order()
        .map(|order| order.to_string())
        .unwrap_or_default();

    info!(
        %order,
        mse = metrics.mse,
        rmse = metrics.rmse,
        mae = metrics.mae,
        r2 = metrics.r2,
        ljung_box_p = residuals.ljung_box.p_value,
        "evaluated"
    );

    Ok(EvaluationReport {
        model: model.name().to_string(),
        order,
        criterion: model.core().criterion().to_string(),
        score: model.score()?,
        train_len: train.len(),
        test_len: test.len(),
        forecast: forecast.into_values(),
        metrics,
        residuals,
        diagnosis,
    })
}
