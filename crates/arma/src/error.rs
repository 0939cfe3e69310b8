//! Error types for the tsforge-arma crate.

/// Error type for all fallible operations in the tsforge-arma crate.
///
/// Covers input validation, numerical breakdowns in the Kalman filter and
/// optimizer failures. Order selection reports
/// [`ArmaError::AllCandidatesFailed`] only when no candidate could be fitted.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArmaError {
    /// Returned when the input data is empty.
    #[error("input data is empty")]
    EmptyData,

    /// Returned when the input data has fewer observations than required.
    #[error("insufficient data: got {n} observations, need at least {min}")]
    InsufficientData {
        /// Number of observations provided.
        n: usize,
        /// Minimum number of observations required.
        min: usize,
    },

    /// Returned when the input data contains non-finite values (NaN or infinity).
    #[error("input data contains non-finite values")]
    NonFiniteData,

    /// Returned when the input data has zero variance.
    #[error("input data is constant (zero variance)")]
    ConstantData,

    /// Returned when seasonal terms are requested with a zero season length.
    #[error("season length must be positive when seasonal orders are non-zero")]
    InvalidSeasonLength,

    /// Returned when the stationary state covariance cannot be computed.
    #[error("model is non-stationary")]
    NonStationary,

    /// Returned when the Kalman filter meets a non-positive innovation variance.
    #[error("innovation variance is not positive at t = {t}")]
    SingularInnovation {
        /// Index of the offending observation.
        t: usize,
    },

    /// Returned when the optimization algorithm fails to converge.
    #[error("optimisation failed to converge")]
    OptimizationFailed,

    /// Returned when every candidate model fails to fit.
    #[error("all {candidates} ARMA candidates failed")]
    AllCandidatesFailed {
        /// Number of candidates attempted.
        candidates: usize,
    },
}
