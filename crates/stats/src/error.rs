//! Error types for the tsforge-stats crate.

/// Error type for the fallible routines of the tsforge-stats crate.
///
/// Metrics and autocorrelation degrade to `0.0` on degenerate input and never
/// fail; only the unit-root test can reject a series.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatsError {
    /// Returned when the series is too short for the requested test.
    #[error("insufficient data: got {n} observations, need at least {min}")]
    InsufficientData {
        /// Number of observations provided.
        n: usize,
        /// Minimum number of observations required.
        min: usize,
    },

    /// Returned when the series contains NaN or infinity.
    #[error("input data contains non-finite values")]
    NonFiniteData,

    /// Returned when the series has zero variance.
    #[error("input data is constant (zero variance)")]
    ConstantData,

    /// Returned when the least-squares design matrix is singular.
    #[error("regression design matrix is singular ({rows}x{cols})")]
    SingularRegression {
        /// Number of observations in the regression.
        rows: usize,
        /// Number of regressors.
        cols: usize,
    },
}
