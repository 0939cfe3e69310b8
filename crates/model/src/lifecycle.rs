//! Lifecycle state shared by every forecast model.

use serde::Serialize;
use tracing::debug;
use tsforge_arma::{ArmaFit, ArmaSpec, InformationCriterion};

use crate::differencing::Differencing;
use crate::error::ModelError;

/// Where a model is in its lifecycle.
///
/// Each stage includes everything the earlier ones provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Stage {
    /// Holds the full series only.
    Created,
    /// Train and test partitions are fixed.
    Split,
    /// An ARMA fit on the differenced training series is available.
    Fitted,
}

#[derive(Debug, Clone)]
pub(crate) struct Fitted {
    pub(crate) arma: ArmaFit,
    pub(crate) differencing: Differencing,
}

/// Data, split and fit shared by [`ArimaModel`](crate::ArimaModel) and
/// [`SarimaModel`](crate::SarimaModel).
#[derive(Debug, Clone)]
pub struct ModelCore {
    data: Vec<f64>,
    train_len: Option<usize>,
    fitted: Option<Fitted>,
    criterion: InformationCriterion,
}

impl ModelCore {
    pub fn new(data: Vec<f64>) -> Self {
        Self {
            data,
            train_len: None,
            fitted: None,
            criterion: InformationCriterion::default(),
        }
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Criterion used by order searches and [`ModelCore::score`].
    pub fn criterion(&self) -> InformationCriterion {
        self.criterion
    }

    pub fn stage(&self) -> Stage {
        match (self.train_len, &self.fitted) {
            (None, _) => Stage::Created,
            (Some(_), None) => Stage::Split,
            (Some(_), Some(_)) => Stage::Fitted,
        }
    }

    /// Leading `floor(n * (1 - test_fraction))` observations, once split.
    pub fn train(&self) -> Option<&[f64]> {
        self.train_len.map(|len| &self.data[..len])
    }

    /// Observations after the training partition, once split.
    pub fn test(&self) -> Option<&[f64]> {
        self.train_len.map(|len| &self.data[len..])
    }

    /// The engine fit behind the model, once fitted.
    pub fn arma_fit(&self) -> Option<&ArmaFit> {
        self.fitted.as_ref().map(|f| &f.arma)
    }

    /// Information criterion of the current fit.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidState`] before the model is fitted.
    pub fn score(&self) -> Result<f64, ModelError> {
        Ok(self.require_fitted("score")?.arma.score(self.criterion))
    }

    pub(crate) fn set_criterion(&mut self, criterion: InformationCriterion) {
        self.criterion = criterion;
    }

    pub(crate) fn split(&mut self, test_fraction: f64) -> Result<(&[f64], &[f64]), ModelError> {
        if self.train_len.is_some() {
            return Err(ModelError::AlreadySplit);
        }
        if !(test_fraction > 0.0 && test_fraction < 1.0) {
            return Err(ModelError::InvalidTestFraction {
                fraction: test_fraction,
            });
        }

        let n = self.data.len();
        let train_len = (n as f64 * (1.0 - test_fraction)).floor() as usize;
        if train_len == 0 || train_len >= n {
            return Err(ModelError::EmptySplit {
                n,
                fraction: test_fraction,
            });
        }

        debug!(n, train = train_len, test = n - train_len, "split series");
        self.train_len = Some(train_len);
        Ok(self.data.split_at(train_len))
    }

    /// Differences the training series and fits `spec` to it, replacing
    /// any earlier fit.
    pub(crate) fn fit_arma(
        &mut self,
        spec: ArmaSpec,
        differencing: Differencing,
    ) -> Result<&ArmaFit, ModelError> {
        let train = self.train().ok_or(ModelError::InvalidState {
            operation: "fit",
            missing: "split",
        })?;
        let differenced = differencing.apply(train);
        let arma = spec.fit(&differenced)?;
        debug!(
            %spec,
            n = differenced.len(),
            consumed = differencing.degree(),
            "fitted differenced training series"
        );

        let fitted = self.fitted.insert(Fitted { arma, differencing });
        Ok(&fitted.arma)
    }

    pub(crate) fn require_fitted(&self, operation: &'static str) -> Result<&Fitted, ModelError> {
        self.fitted.as_ref().ok_or(ModelError::InvalidState {
            operation,
            missing: "fitted",
        })
    }

    /// Level forecasts continuing the training series.
    pub(crate) fn forecast(&self, horizon: usize) -> Result<Vec<f64>, ModelError> {
        let fitted = self.require_fitted("predict")?;
        let history = self.train().unwrap_or_default();
        let differenced = fitted.arma.forecast(horizon);
        Ok(fitted.differencing.integrate(history, &differenced))
    }
}
