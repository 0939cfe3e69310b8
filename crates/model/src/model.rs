//! The contract shared by ARIMA and SARIMA models.

use std::fmt;

use tracing::debug;
use tsforge_stats::{Metrics, StationarityTest, stationarity_test};

use crate::diagnosis::{Diagnosis, diagnose};
use crate::error::ModelError;
use crate::forecast::ForecastResult;
use crate::lifecycle::{ModelCore, Stage};

/// A forecast model over one owned series.
///
/// Implementors supply the lifecycle state through [`ForecastModel::core`]
/// and their own [`ForecastModel::fit`]; everything else is shared.
///
/// ```text
/// Created --split--> Split --fit--> Fitted --> predict / evaluate / suggest_improvements
/// ```
///
/// Stationarity checks and order searches read the full series and work in
/// any stage.
pub trait ForecastModel {
    /// Order accepted by [`ForecastModel::fit`].
    type Order: Copy + fmt::Display;

    /// Short model family name used in logs and reports.
    fn name(&self) -> &'static str;

    fn core(&self) -> &ModelCore;

    fn core_mut(&mut self) -> &mut ModelCore;

    /// Order of the current fit.
    fn order(&self) -> Option<Self::Order>;

    /// Fits `order` to the training partition, replacing any earlier fit.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ModelError::InvalidState`] | the model has not been split |
    /// | [`ModelError::InvalidOrder`] | the order is malformed |
    /// | [`ModelError::Arma`] | the differenced training series cannot be fitted |
    fn fit(&mut self, order: Self::Order) -> Result<(), ModelError>;

    fn data(&self) -> &[f64] {
        self.core().data()
    }

    fn stage(&self) -> Stage {
        self.core().stage()
    }

    /// Splits chronologically and returns `(train, test)`; the last
    /// `test_fraction` of the series is held out.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ModelError::AlreadySplit`] | called a second time |
    /// | [`ModelError::InvalidTestFraction`] | fraction outside `(0, 1)` |
    /// | [`ModelError::EmptySplit`] | either side would be empty |
    fn split(&mut self, test_fraction: f64) -> Result<(&[f64], &[f64]), ModelError> {
        self.core_mut().split(test_fraction)
    }

    fn train(&self) -> Option<&[f64]> {
        self.core().train()
    }

    fn test(&self) -> Option<&[f64]> {
        self.core().test()
    }

    /// Augmented Dickey-Fuller test on the full series.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Stats`] when the series cannot be tested.
    fn stationarity(&self) -> Result<StationarityTest, ModelError> {
        Ok(stationarity_test(self.data())?)
    }

    /// `true` when the full series rejects a unit root at the 5% level.
    ///
    /// # Errors
    ///
    /// Same as [`ForecastModel::stationarity`].
    fn is_stationary(&self) -> Result<bool, ModelError> {
        Ok(self.stationarity()?.is_stationary())
    }

    /// Smallest `d <= max_d` at which the series tests stationary, else
    /// `max_d + 1` (saturating).
    ///
    /// The test always runs on the original series, never on a differenced
    /// one, so the answer is either `0` or `max_d + 1`.
    ///
    /// # Errors
    ///
    /// Same as [`ForecastModel::stationarity`].
    fn discover_difference_order(&self, max_d: usize) -> Result<usize, ModelError> {
        if self.is_stationary()? {
            debug!(model = self.name(), d = 0, "series is stationary");
            return Ok(0);
        }
        debug!(model = self.name(), max_d, "no stationary difference order found");
        Ok(max_d.saturating_add(1))
    }

    /// One-step innovations of the fitted differenced training series.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidState`] before the model is fitted.
    fn residuals(&self) -> Result<&[f64], ModelError> {
        Ok(self.core().require_fitted("read residuals")?.arma.residuals())
    }

    /// Information criterion of the fit; lower is better.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidState`] before the model is fitted.
    fn score(&self) -> Result<f64, ModelError> {
        self.core().score()
    }

    /// Forecasts `horizon` steps past the end of the training partition.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidState`] before the model is fitted.
    fn predict(&self, horizon: usize) -> Result<ForecastResult, ModelError> {
        let values = self.core().forecast(horizon)?;
        debug!(model = self.name(), horizon, "forecast");
        ForecastResult::new(values, horizon)
    }

    /// Accuracy of `predicted` against `actual`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidState`] before the model is fitted.
    fn evaluate(&self, actual: &[f64], predicted: &[f64]) -> Result<Metrics, ModelError> {
        self.core().require_fitted("evaluate")?;
        Ok(Metrics::compute(actual, predicted))
    }

    /// Flags under-fitted AR or MA orders from residual autocorrelation.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidState`] before the model is fitted.
    fn suggest_improvements(&self) -> Result<Diagnosis, ModelError> {
        let fitted = self.core().require_fitted("suggest improvements")?;
        Ok(diagnose(fitted.arma.residuals()))
    }
}
