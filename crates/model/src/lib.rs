//! # tsforge-model
//!
//! ARIMA and SARIMA forecast models built on the `tsforge-arma` engine.
//!
//! A model owns one series and moves through a small lifecycle:
//!
//! ```mermaid
//! stateDiagram-v2
//!     [*] --> Created: new(data)
//!     Created --> Split: split(test_fraction)
//!     Split --> Fitted: fit(order)
//!     Fitted --> Fitted: fit(order)
//!     Fitted --> Fitted: predict / evaluate / suggest_improvements
//! ```
//!
//! Order discovery runs in any stage and returns plain values that the
//! caller threads into the next step:
//!
//! 1. [`ForecastModel::discover_difference_order`] (and
//!    [`SarimaModel::discover_seasonal_difference_order`]) pick `d` / `D`.
//! 2. [`ArimaModel::search_best_order`] or
//!    [`SarimaModel::search_best_order`] grid-search the remaining orders on
//!    the full series under the model's [`InformationCriterion`].
//! 3. [`ForecastModel::fit`] fits the chosen order to the training
//!    partition.
//!
//! Fitting differences the training series by `(1 - B)^d (1 - B^s)^D`;
//! predictions are integrated back onto the level of the training series.
//!
//! # Example
//!
//! ```
//! use tsforge_model::{ArimaModel, ForecastModel};
//!
//! let data: Vec<f64> = (0..120).map(|i| (i as f64 * 0.4).sin() + 0.1 * ((i * 7 % 5) as f64)).collect();
//! let mut model = ArimaModel::new(data);
//! model.split(0.2).unwrap();
//!
//! let d = model.discover_difference_order(2).unwrap();
//! let (order, _score) = model.search_best_order(d.min(2), 2, 2).unwrap();
//! model.fit(order).unwrap();
//!
//! let forecast = model.predict(model.test().unwrap().len()).unwrap();
//! let metrics = model.evaluate(model.test().unwrap(), forecast.values()).unwrap();
//! assert!(metrics.rmse.is_finite());
//! ```
//!
//! # Errors
//!
//! | Variant | Trigger |
//! |---------|---------|
//! | [`ModelError::InvalidState`] | fit before split, or predict/evaluate/diagnose before fit |
//! | [`ModelError::AlreadySplit`] | a second `split` |
//! | [`ModelError::InvalidTestFraction`] | test fraction outside `(0, 1)` |
//! | [`ModelError::EmptySplit`] | split leaves an empty side |
//! | [`ModelError::InvalidOrder`] | malformed seasonal order |
//! | [`ModelError::Stats`] | stationarity test failure |
//! | [`ModelError::Arma`] | fit or search failure |

mod arima;
mod diagnosis;
mod differencing;
mod error;
mod forecast;
mod lifecycle;
mod model;
mod order;
mod sarima;

pub use arima::ArimaModel;
pub use diagnosis::{DIAGNOSIS_THRESHOLD, Diagnosis};
pub use error::ModelError;
pub use forecast::ForecastResult;
pub use lifecycle::{ModelCore, Stage};
pub use model::ForecastModel;
pub use order::{ModelOrder, SarimaOrder, SeasonalOrder};
pub use sarima::{SarimaModel, SeasonalSearch};
pub use tsforge_arma::InformationCriterion;
