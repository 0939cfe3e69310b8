use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// tsforge synthetic series generator and ARIMA/SARIMA forecaster.
#[derive(Parser)]
#[command(
    name = "tsforge",
    version,
    about = "Generate ARMA-family series and select ARIMA/SARIMA forecast models"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate a synthetic series from the configured process.
    Generate(GenerateArgs),
    /// Select, fit and evaluate a forecast model for a series.
    Forecast(ForecastArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "tsforge.toml")]
    pub config: PathBuf,

    /// Override output JSON path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override global RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Arguments for the `forecast` subcommand.
#[derive(clap::Args)]
pub struct ForecastArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "tsforge.toml")]
    pub config: PathBuf,

    /// Path to a JSON array of observations.
    #[arg(long)]
    pub series: PathBuf,

    /// Path for the evaluation report JSON.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
