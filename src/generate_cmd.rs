//! Generate command: write a synthetic series as a JSON array.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, info_span};

use tsforge_generate::{
    generate_ar, generate_arima, generate_arma, generate_ma, generate_sarimax, generate_shape,
    time_grid,
};

use crate::cli::GenerateArgs;
use crate::config::{GenerateToml, TsforgeConfig};
use crate::convert::{self, Process};

/// Run the generation pipeline.
pub fn run(args: GenerateArgs) -> Result<()> {
    let _cmd = info_span!("generate").entered();
    let toml_str = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config file: {}", args.config.display()))?;
    let config: TsforgeConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;

    let output = args
        .output
        .or_else(|| config.generate.output.clone())
        .ok_or_else(|| {
            anyhow!("no output path: set [generate].output in config or use --output")
        })?;

    let mut rng = match args.seed.or(config.seed) {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    let series = generate(&config.generate, &mut rng)?;
    write_series(&series, &output)?;
    info!(path = %output.display(), n = series.len(), "series written");
    Ok(())
}

/// Draws one series from the configured process.
pub fn generate(cfg: &GenerateToml, rng: &mut StdRng) -> Result<Vec<f64>> {
    let process = convert::parse_process(&cfg.process)?;
    info!(?process, n = cfg.n, "generating series");

    let series = match process {
        Process::Ar => generate_ar(cfg.n, &cfg.ar, cfg.noise_std, rng),
        Process::Ma => generate_ma(cfg.n, &cfg.ma, cfg.noise_std, rng),
        Process::Arma => generate_arma(cfg.n, &cfg.ar, &cfg.ma, cfg.noise_std, rng),
        Process::Arima => generate_arima(cfg.n, &cfg.ar, cfg.d, &cfg.ma, cfg.noise_std, rng),
        Process::Sarimax => {
            let seasonal_order = cfg.seasonal_order.as_deref().ok_or_else(|| {
                anyhow!("the sarimax process requires [generate].seasonal_order")
            })?;
            generate_sarimax(
                cfg.n,
                &cfg.ar,
                cfg.d,
                &cfg.ma,
                seasonal_order,
                cfg.noise_std,
                rng,
            )
        }
        Process::Shape => {
            let shape = cfg
                .shape
                .as_ref()
                .ok_or_else(|| anyhow!("the shape process requires a [generate.shape] table"))?;
            time_grid(cfg.n, cfg.step)
                .and_then(|time| generate_shape(&time, shape, cfg.noise_std, rng))
        }
    };
    series.with_context(|| format!("failed to generate {} series", cfg.process))
}

fn write_series(series: &[f64], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(series).context("failed to serialize series")?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write series: {}", path.display()))
}
