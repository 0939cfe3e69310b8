//! Forecast command: discover orders, fit, evaluate and write a report.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use tsforge_evaluate::{EvaluateConfig, evaluate_model, write_json};
use tsforge_model::{ArimaModel, ForecastModel, SarimaModel};

use crate::cli::ForecastArgs;
use crate::config::{ForecastToml, TsforgeConfig};
use crate::convert::{self, ModelKind};

/// Run the forecast pipeline.
pub fn run(args: ForecastArgs) -> Result<()> {
    let _cmd = info_span!("forecast").entered();
    let toml_str = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config file: {}", args.config.display()))?;
    let config: TsforgeConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;

    let series = read_series(&args.series)?;
    info!(path = %args.series.display(), n = series.len(), "series loaded");

    let output = args
        .output
        .unwrap_or_else(|| default_report_path(&args.series));
    let eval_cfg = convert::build_evaluate_config(&config.evaluate);

    forecast(series, &config.forecast, &eval_cfg, &output)?;
    info!(path = %output.display(), "report written");
    Ok(())
}

/// Splits, discovers orders, fits and writes the evaluation report.
pub fn forecast(
    series: Vec<f64>,
    cfg: &ForecastToml,
    eval_cfg: &EvaluateConfig,
    output: &Path,
) -> Result<()> {
    let criterion = convert::parse_criterion(&cfg.criterion)?;

    match convert::parse_model_kind(&cfg.model)? {
        ModelKind::Arima => {
            let mut model = ArimaModel::new(series).with_criterion(criterion);
            model.split(cfg.test_fraction).context("failed to split series")?;

            let d = model
                .discover_difference_order(cfg.max_d)
                .context("stationarity test failed")?;
            let (order, score) = model
                .search_best_order(d, cfg.max_p, cfg.max_q)
                .context("order search failed")?;
            info!(%order, score, "selected order");

            model.fit(order).context("failed to fit model")?;
            report(&model, eval_cfg, output)
        }
        ModelKind::Sarima => {
            let search = convert::build_seasonal_search(cfg)?;
            let mut model = SarimaModel::new(series).with_criterion(criterion);
            model.split(cfg.test_fraction).context("failed to split series")?;

            let d = model
                .discover_difference_order(cfg.max_d)
                .context("stationarity test failed")?;
            let seasonal_d = model
                .discover_seasonal_difference_order(search.season_length(), cfg.max_seasonal_d)
                .context("stationarity test failed")?;
            let (order, score) = model
                .search_best_order(d, seasonal_d, &search)
                .context("order search failed")?;
            info!(%order, score, "selected order");

            model.fit(order).context("failed to fit model")?;
            report(&model, eval_cfg, output)
        }
    }
}

fn report<M: ForecastModel>(model: &M, eval_cfg: &EvaluateConfig, output: &Path) -> Result<()> {
    let report = evaluate_model(model, eval_cfg).context("evaluation failed")?;
    write_json(&report, output).context("failed to write report")?;
    Ok(())
}

fn read_series(path: &Path) -> Result<Vec<f64>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read series: {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("series is not a JSON array of numbers: {}", path.display()))
}

/// `foo.json` -> `foo.report.json`
fn default_report_path(series: &Path) -> PathBuf {
    series.with_extension("report.json")
}
