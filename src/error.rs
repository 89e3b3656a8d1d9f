//! Error types for the Grey Wolf optimizer

use thiserror::Error;

/// Errors that can occur while configuring or running the optimizer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GwoError {
    /// Invalid bounds, mismatched lengths, or non-positive sizes.
    /// Raised before any objective evaluation takes place.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The objective returned a batch of the wrong length or a non-finite value.
    /// Aborts the run; no partial result is produced.
    #[error("Evaluation error: {0}")]
    Evaluation(String),
}

pub type GwoResult<T> = Result<T, GwoError>;
