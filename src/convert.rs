//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, anyhow, bail};

use crate::config::*;

use tsforge_evaluate::EvaluateConfig;
use tsforge_model::{InformationCriterion, SeasonalSearch};

/// Generator selected by `[generate].process`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Process {
    Ar,
    Ma,
    Arma,
    Arima,
    Sarimax,
    Shape,
}

/// Model family selected by `[forecast].model`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    Arima,
    Sarima,
}

/// Parses a process name string into the corresponding enum variant.
pub fn parse_process(s: &str) -> Result<Process> {
    match s.to_lowercase().as_str() {
        "ar" => Ok(Process::Ar),
        "ma" => Ok(Process::Ma),
        "arma" => Ok(Process::Arma),
        "arima" => Ok(Process::Arima),
        "sarimax" => Ok(Process::Sarimax),
        "shape" => Ok(Process::Shape),
        other => bail!("unknown process: {other:?}"),
    }
}

/// Parses a model family name string into the corresponding enum variant.
pub fn parse_model_kind(s: &str) -> Result<ModelKind> {
    match s.to_lowercase().as_str() {
        "arima" => Ok(ModelKind::Arima),
        "sarima" => Ok(ModelKind::Sarima),
        other => bail!("unknown model: {other:?}"),
    }
}

/// Parses an information criterion name (`aic`, `aicc`, `bic`).
pub fn parse_criterion(s: &str) -> Result<InformationCriterion> {
    s.parse().map_err(|e: String| anyhow!(e))
}

/// Builds a [`SeasonalSearch`] from the TOML forecast configuration.
///
/// `season_length` must be set and positive.
pub fn build_seasonal_search(forecast: &ForecastToml) -> Result<SeasonalSearch> {
    let season_length = match forecast.season_length {
        Some(s) if s > 0 => s,
        Some(_) => bail!("[forecast].season_length must be positive"),
        None => bail!("SARIMA requires [forecast].season_length"),
    };
    Ok(SeasonalSearch::new(season_length)
        .with_max_order(forecast.max_p, forecast.max_q)
        .with_max_seasonal_order(forecast.max_seasonal_p, forecast.max_seasonal_q))
}

/// Builds an [`EvaluateConfig`] from the TOML evaluate configuration.
pub fn build_evaluate_config(eval: &EvaluateToml) -> EvaluateConfig {
    let cfg = EvaluateConfig::default()
        .with_ljung_box_lags(eval.ljung_box_lags)
        .with_confidence_z(eval.confidence_z);
    match eval.acf_lags {
        Some(lags) => cfg.with_acf_lags(lags),
        None => cfg,
    }
}
