//! Evaluation error types.

use std::path::PathBuf;

use tsforge_model::ModelError;

/// Errors that can occur during evaluation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EvaluateError {
    /// The model could not forecast, score or diagnose.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// JSON serialization failed.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },

    /// Writing the report failed.
    #[error("failed to write {}: {reason}", path.display())]
    Io { path: PathBuf, reason: String },
}
