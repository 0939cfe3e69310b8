//! Fitted ARMA model results.

use crate::selection::InformationCriterion;
use crate::spec::ArmaSpec;
use crate::state_space::StateSpace;

/// A fitted (seasonal) ARMA model produced by [`ArmaSpec::fit()`].
///
/// Contains the estimated coefficient blocks, innovation variance
/// (`sigma2`), one-step residuals, log-likelihood and the filter state at
/// the end of the data, from which [`ArmaFit::forecast()`] extrapolates.
///
/// ```mermaid
/// graph LR
///     B["ArmaFit"] --> C[".ar() / .seasonal_ar()"]
///     B --> D[".ma() / .seasonal_ma()"]
///     B --> E[".aic() / .aicc() / .bic()"]
///     B --> F[".forecast(horizon)"]
/// ```
#[derive(Clone, Debug)]
pub struct ArmaFit {
    spec: ArmaSpec,
    ar: Vec<f64>,
    ma: Vec<f64>,
    seasonal_ar: Vec<f64>,
    seasonal_ma: Vec<f64>,
    expanded_ar: Vec<f64>,
    expanded_ma: Vec<f64>,
    sigma2: f64,
    residuals: Vec<f64>,
    log_likelihood: f64,
    mean: f64,
    state: Vec<f64>,
}

/// Constructor arguments for [`ArmaFit`].
#[derive(Clone, Debug, Default)]
pub(crate) struct FitParts {
    pub(crate) ar: Vec<f64>,
    pub(crate) ma: Vec<f64>,
    pub(crate) seasonal_ar: Vec<f64>,
    pub(crate) seasonal_ma: Vec<f64>,
    pub(crate) sigma2: f64,
    pub(crate) residuals: Vec<f64>,
    pub(crate) log_likelihood: f64,
    pub(crate) mean: f64,
    pub(crate) state: Vec<f64>,
}

impl ArmaFit {
    pub(crate) fn new(spec: ArmaSpec, parts: FitParts) -> Self {
        let s = spec.season_length();
        let expanded_ar = crate::polynomial::expand_ar(&parts.ar, &parts.seasonal_ar, s);
        let expanded_ma = crate::polynomial::expand_ma(&parts.ma, &parts.seasonal_ma, s);
        Self {
            spec,
            ar: parts.ar,
            ma: parts.ma,
            seasonal_ar: parts.seasonal_ar,
            seasonal_ma: parts.seasonal_ma,
            expanded_ar,
            expanded_ma,
            sigma2: parts.sigma2,
            residuals: parts.residuals,
            log_likelihood: parts.log_likelihood,
            mean: parts.mean,
            state: parts.state,
        }
    }

    /// Returns the [`ArmaSpec`] that produced this fit.
    pub fn spec(&self) -> ArmaSpec {
        self.spec
    }

    /// Returns the non-seasonal `(p, q)` order.
    pub fn order(&self) -> (usize, usize) {
        (self.spec.p(), self.spec.q())
    }

    /// Returns the AR coefficients (`phi`).
    pub fn ar(&self) -> &[f64] {
        &self.ar
    }

    /// Returns the MA coefficients (`theta`).
    pub fn ma(&self) -> &[f64] {
        &self.ma
    }

    /// Returns the seasonal AR coefficients (`Phi`).
    pub fn seasonal_ar(&self) -> &[f64] {
        &self.seasonal_ar
    }

    /// Returns the seasonal MA coefficients (`Theta`).
    pub fn seasonal_ma(&self) -> &[f64] {
        &self.seasonal_ma
    }

    /// Returns the innovation variance (`sigma2`).
    pub fn sigma2(&self) -> f64 {
        self.sigma2
    }

    /// Returns the one-step-ahead prediction residuals.
    pub fn residuals(&self) -> &[f64] {
        &self.residuals
    }

    /// Returns the maximised log-likelihood.
    pub fn log_likelihood(&self) -> f64 {
        self.log_likelihood
    }

    /// Returns the sample mean removed before fitting.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Number of observations the model was fitted to.
    pub fn n_obs(&self) -> usize {
        self.residuals.len()
    }

    /// Akaike Information Criterion `2k - 2ℓ`, with `k = p + q + P + Q + 1`.
    pub fn aic(&self) -> f64 {
        2.0 * self.spec.n_params() as f64 - 2.0 * self.log_likelihood
    }

    /// Small-sample corrected AIC, `AIC + 2k(k+1)/(n-k-1)`.
    ///
    /// Infinite when `n <= k + 1`.
    pub fn aicc(&self) -> f64 {
        let k = self.spec.n_params() as f64;
        let n = self.n_obs() as f64;
        let denom = n - k - 1.0;
        if denom <= 0.0 {
            return f64::INFINITY;
        }
        self.aic() + 2.0 * k * (k + 1.0) / denom
    }

    /// Bayesian Information Criterion `k·ln n - 2ℓ`.
    pub fn bic(&self) -> f64 {
        let k = self.spec.n_params() as f64;
        k * (self.n_obs() as f64).ln() - 2.0 * self.log_likelihood
    }

    /// Value of `criterion` for this fit; lower is better.
    pub fn score(&self, criterion: InformationCriterion) -> f64 {
        match criterion {
            InformationCriterion::Aic => self.aic(),
            InformationCriterion::Aicc => self.aicc(),
            InformationCriterion::Bic => self.bic(),
        }
    }

    /// Point forecasts for the `horizon` steps after the fitted data.
    ///
    /// Propagates the final filter state through the transition matrix and
    /// adds back the mean.
    ///
    /// # Example
    ///
    /// ```
    /// use tsforge_arma::ArmaSpec;
    ///
    /// let data: Vec<f64> = (0..60).map(|i| ((i * 7 % 11) as f64).sin()).collect();
    /// let fit = ArmaSpec::new(1, 0).fit(&data).unwrap();
    /// assert_eq!(fit.forecast(5).len(), 5);
    /// ```
    pub fn forecast(&self, horizon: usize) -> Vec<f64> {
        let ss = StateSpace::new(&self.expanded_ar, &self.expanded_ma);
        let mut state = self.state.clone();
        let mut out = Vec::with_capacity(horizon);
        for _ in 0..horizon {
            out.push(self.mean + state.first().copied().unwrap_or(0.0));
            state = ss.advance(&state);
        }
        out
    }
}
