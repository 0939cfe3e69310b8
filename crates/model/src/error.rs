//! Error types for the tsforge-model crate.

use tsforge_arma::ArmaError;
use tsforge_stats::StatsError;

/// Error type for all fallible operations in the tsforge-model crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    /// Returned when an operation runs before a lifecycle step it needs.
    #[error("cannot {operation} before the model is {missing}")]
    InvalidState {
        /// The operation that was attempted.
        operation: &'static str,
        /// The lifecycle step that has not happened yet.
        missing: &'static str,
    },

    /// Returned when `split` is called on a model that already has a split.
    #[error("model is already split; the split is immutable")]
    AlreadySplit,

    /// Returned when the test fraction is outside `(0, 1)`.
    #[error("test fraction must be in (0, 1), got {fraction}")]
    InvalidTestFraction {
        /// The rejected fraction.
        fraction: f64,
    },

    /// Returned when a split would leave the train or test side empty.
    #[error("splitting {n} observations at test fraction {fraction} leaves an empty side")]
    EmptySplit {
        /// Series length.
        n: usize,
        /// Requested test fraction.
        fraction: f64,
    },

    /// Returned when an order is malformed.
    #[error("invalid order: {reason}")]
    InvalidOrder {
        /// Why the order was rejected.
        reason: String,
    },

    /// Returned when a forecast does not have one value per horizon step.
    #[error("forecast has {len} values for horizon {horizon}")]
    ForecastLength {
        /// Number of values supplied.
        len: usize,
        /// Requested horizon.
        horizon: usize,
    },

    /// Stationarity testing failed.
    #[error(transparent)]
    Stats(#[from] StatsError),

    /// ARMA fitting or selection failed.
    #[error(transparent)]
    Arma(#[from] ArmaError),
}
