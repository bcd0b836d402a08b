//! Submission errors

use thiserror::Error;

/// Result type for submission operations.
pub type SubmitResult<T> = Result<T, SubmitError>;

/// Transport-level submission failure. A response with a non-2xx
/// status is NOT an error - it is a classified [`super::SubmitOutcome`].
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The request never produced a response.
    #[error("submission transport failed: {0}")]
    Transport(#[from] reqwest::Error),
}
