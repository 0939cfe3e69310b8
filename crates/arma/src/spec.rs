//! ARMA model specification (unfitted).

use std::fmt;

use crate::error::ArmaError;
use crate::fit::ArmaFit;

/// An unfitted, optionally seasonal, ARMA specification.
///
/// The model is `(1 - φ(B))(1 - Φ(Bˢ)) y[t] = (1 + θ(B))(1 + Θ(Bˢ)) e[t]`
/// with `p`, `q` non-seasonal and `P`, `Q` seasonal orders.
///
/// # Typestate Workflow
///
/// ```mermaid
/// graph LR
///     A["ArmaSpec::new(p, q)"] -->|".fit(&data)?"| C["ArmaFit"]
///     B["ArmaSpec::seasonal(p, q, P, Q, s)"] -->|".fit(&data)?"| C
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ArmaSpec {
    p: usize,
    q: usize,
    seasonal_p: usize,
    seasonal_q: usize,
    season_length: usize,
}

impl ArmaSpec {
    /// Creates a non-seasonal ARMA(p,q) specification.
    ///
    /// # Example
    ///
    /// ```
    /// use tsforge_arma::ArmaSpec;
    ///
    /// let spec = ArmaSpec::new(2, 1);
    /// assert_eq!(spec.p(), 2);
    /// assert_eq!(spec.q(), 1);
    /// assert!(!spec.is_seasonal());
    /// ```
    pub fn new(p: usize, q: usize) -> Self {
        Self {
            p,
            q,
            seasonal_p: 0,
            seasonal_q: 0,
            season_length: 0,
        }
    }

    /// Creates a seasonal ARMA(p,q)(P,Q)ₛ specification.
    pub fn seasonal(
        p: usize,
        q: usize,
        seasonal_p: usize,
        seasonal_q: usize,
        season_length: usize,
    ) -> Self {
        Self {
            p,
            q,
            seasonal_p,
            seasonal_q,
            season_length,
        }
    }

    /// Returns the AR order (`p`).
    pub fn p(&self) -> usize {
        self.p
    }

    /// Returns the MA order (`q`).
    pub fn q(&self) -> usize {
        self.q
    }

    /// Returns the seasonal AR order (`P`).
    pub fn seasonal_p(&self) -> usize {
        self.seasonal_p
    }

    /// Returns the seasonal MA order (`Q`).
    pub fn seasonal_q(&self) -> usize {
        self.seasonal_q
    }

    /// Returns the season length (`s`).
    pub fn season_length(&self) -> usize {
        self.season_length
    }

    /// `true` when any seasonal order is non-zero.
    pub fn is_seasonal(&self) -> bool {
        self.seasonal_p + self.seasonal_q > 0
    }

    /// Number of free parameters `p + q + P + Q + 1`, counting the
    /// innovation variance.
    pub fn n_params(&self) -> usize {
        self.p + self.q + self.seasonal_p + self.seasonal_q + 1
    }

    /// Degree of the expanded AR polynomial, `p + s·P`.
    pub(crate) fn ar_degree(&self) -> usize {
        self.p + self.season_length * self.seasonal_p
    }

    /// Degree of the expanded MA polynomial, `q + s·Q`.
    pub(crate) fn ma_degree(&self) -> usize {
        self.q + self.season_length * self.seasonal_q
    }

    /// Fewest observations a fit accepts.
    pub fn min_observations(&self) -> usize {
        self.ar_degree().max(self.ma_degree()).max(1) + 1
    }

    /// Fits this specification to observed data via exact maximum
    /// likelihood (Kalman filter).
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ArmaError::InvalidSeasonLength`] | `P + Q > 0` with `s == 0` |
    /// | [`ArmaError::EmptyData`] | `data` is empty |
    /// | [`ArmaError::NonFiniteData`] | any element is NaN or infinite |
    /// | [`ArmaError::InsufficientData`] | `data.len() < min_observations()` |
    /// | [`ArmaError::ConstantData`] | all elements are identical |
    /// | [`ArmaError::NonStationary`] | stationary covariance does not converge |
    /// | [`ArmaError::OptimizationFailed`] | optimizer fails to converge |
    pub fn fit(&self, data: &[f64]) -> Result<ArmaFit, ArmaError> {
        if self.is_seasonal() && self.season_length == 0 {
            return Err(ArmaError::InvalidSeasonLength);
        }
        crate::optimizer::fit_arma(*self, data)
    }
}

impl fmt::Display for ArmaSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ARMA({},{})", self.p, self.q)?;
        if self.is_seasonal() {
            write!(
                f,
                "({},{})[{}]",
                self.seasonal_p, self.seasonal_q, self.season_length
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_round_trip() {
        let spec = ArmaSpec::seasonal(2, 1, 1, 0, 12);
        assert_eq!(spec.p(), 2);
        assert_eq!(spec.q(), 1);
        assert_eq!(spec.seasonal_p(), 1);
        assert_eq!(spec.seasonal_q(), 0);
        assert_eq!(spec.season_length(), 12);
        assert!(spec.is_seasonal());
    }

    #[test]
    fn spec_params_and_degrees() {
        let spec = ArmaSpec::seasonal(1, 2, 1, 1, 4);
        assert_eq!(spec.n_params(), 6);
        assert_eq!(spec.ar_degree(), 5);
        assert_eq!(spec.ma_degree(), 6);
        assert_eq!(spec.min_observations(), 7);
        assert_eq!(ArmaSpec::new(0, 0).min_observations(), 2);
    }

    #[test]
    fn spec_display() {
        assert_eq!(ArmaSpec::new(2, 1).to_string(), "ARMA(2,1)");
        assert_eq!(
            ArmaSpec::seasonal(1, 0, 0, 1, 12).to_string(),
            "ARMA(1,0)(0,1)[12]"
        );
    }

    #[test]
    fn spec_partial_eq() {
        assert_eq!(ArmaSpec::new(1, 1), ArmaSpec::seasonal(1, 1, 0, 0, 0));
        assert_ne!(ArmaSpec::new(1, 1), ArmaSpec::new(2, 0));
    }

    #[test]
    fn fit_empty_data() {
        let err = ArmaSpec::new(1, 0).fit(&[]).unwrap_err();
        assert!(matches!(err, ArmaError::EmptyData));
    }

    #[test]
    fn fit_insufficient_data() {
        let err = ArmaSpec::new(2, 0).fit(&[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, ArmaError::InsufficientData { n: 2, min: 3 }));
    }

    #[test]
    fn fit_seasonal_without_period() {
        let err = ArmaSpec::seasonal(0, 0, 1, 0, 0)
            .fit(&[1.0, 2.0, 3.0, 1.0])
            .unwrap_err();
        assert!(matches!(err, ArmaError::InvalidSeasonLength));
    }

    #[test]
    fn fit_nan_data() {
        let err = ArmaSpec::new(1, 0).fit(&[1.0, f64::NAN, 3.0]).unwrap_err();
        assert!(matches!(err, ArmaError::NonFiniteData));
    }

    #[test]
    fn fit_constant_data() {
        let err = ArmaSpec::new(1, 0)
            .fit(&[5.0, 5.0, 5.0, 5.0, 5.0])
            .unwrap_err();
        assert!(matches!(err, ArmaError::ConstantData));
    }
}
