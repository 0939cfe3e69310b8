use std::path::PathBuf;

use serde::Deserialize;
use tsforge_generate::Shape;

/// Top-level tsforge configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TsforgeConfig {
    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Series generation settings.
    #[serde(default)]
    pub generate: GenerateToml,

    /// Model selection settings.
    #[serde(default)]
    pub forecast: ForecastToml,

    /// Evaluation settings.
    #[serde(default)]
    pub evaluate: EvaluateToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateToml {
    #[serde(default = "default_process")]
    pub process: String,
    #[serde(default = "default_n")]
    pub n: usize,
    #[serde(default)]
    pub ar: Vec<f64>,
    #[serde(default)]
    pub ma: Vec<f64>,
    #[serde(default)]
    pub d: usize,
    /// `[P, D, Q, s]`, used by the `sarimax` process.
    #[serde(default)]
    pub seasonal_order: Option<Vec<usize>>,
    /// Trend or seasonal shape, used by the `shape` process.
    #[serde(default)]
    pub shape: Option<Shape>,
    /// Time step between samples of the `shape` process.
    #[serde(default = "default_step")]
    pub step: f64,
    #[serde(default = "default_noise_std")]
    pub noise_std: f64,
    pub output: Option<PathBuf>,
}

impl Default for GenerateToml {
    fn default() -> Self {
        Self {
            process: default_process(),
            n: default_n(),
            ar: Vec::new(),
            ma: Vec::new(),
            d: 0,
            seasonal_order: None,
            shape: None,
            step: default_step(),
            noise_std: default_noise_std(),
            output: None,
        }
    }
}

fn default_process() -> String {
    "arma".to_string()
}
fn default_n() -> usize {
    500
}
fn default_step() -> f64 {
    1.0
}
fn default_noise_std() -> f64 {
    1.0
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForecastToml {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_test_fraction")]
    pub test_fraction: f64,
    #[serde(default = "default_criterion")]
    pub criterion: String,
    #[serde(default = "default_max_d")]
    pub max_d: usize,
    #[serde(default = "default_max_order")]
    pub max_p: usize,
    #[serde(default = "default_max_order")]
    pub max_q: usize,
    #[serde(default)]
    pub season_length: Option<usize>,
    #[serde(default = "default_max_seasonal")]
    pub max_seasonal_d: usize,
    #[serde(default = "default_max_seasonal")]
    pub max_seasonal_p: usize,
    #[serde(default = "default_max_seasonal")]
    pub max_seasonal_q: usize,
}

impl Default for ForecastToml {
    fn default() -> Self {
        Self {
            model: default_model(),
            test_fraction: default_test_fraction(),
            criterion: default_criterion(),
            max_d: default_max_d(),
            max_p: default_max_order(),
            max_q: default_max_order(),
            season_length: None,
            max_seasonal_d: default_max_seasonal(),
            max_seasonal_p: default_max_seasonal(),
            max_seasonal_q: default_max_seasonal(),
        }
    }
}

fn default_model() -> String {
    "arima".to_string()
}
fn default_test_fraction() -> f64 {
    0.2
}
fn default_criterion() -> String {
    "aic".to_string()
}
fn default_max_d() -> usize {
    2
}
fn default_max_order() -> usize {
    3
}
fn default_max_seasonal() -> usize {
    1
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EvaluateToml {
    #[serde(default)]
    pub acf_lags: Option<usize>,
    #[serde(default = "default_ljung_box_lags")]
    pub ljung_box_lags: usize,
    #[serde(default = "default_confidence_z")]
    pub confidence_z: f64,
}

impl Default for EvaluateToml {
    fn default() -> Self {
        Self {
            acf_lags: None,
            ljung_box_lags: default_ljung_box_lags(),
            confidence_z: default_confidence_z(),
        }
    }
}

fn default_ljung_box_lags() -> usize {
    10
}
fn default_confidence_z() -> f64 {
    1.96
}
