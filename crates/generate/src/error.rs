//! Error types for the tsforge-generate crate.

/// Error type for all fallible operations in the tsforge-generate crate.
///
/// Generators have no runtime failure modes beyond malformed parameters,
/// so every variant here describes a precondition the caller violated.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GenerateError {
    /// Returned when the noise standard deviation is negative or non-finite.
    #[error("noise standard deviation must be finite and non-negative, got {std}")]
    InvalidNoiseStd {
        /// The rejected standard deviation.
        std: f64,
    },

    /// Returned when a parameter vector has the wrong shape or content.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}
