//! CLI errors

use thiserror::Error;

use crate::schema::RegistryError;
use crate::submit::SubmitError;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced to the terminal. Each one is scoped to a single
/// invocation; nothing here is fatal beyond the process exit code.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in '{path}': {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not encode output: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Submit(#[from] SubmitError),

    /// Per-field messages were already printed to stderr.
    #[error("validation failed: {fields} field(s) rejected")]
    ValidationFailed { fields: usize },

    #[error("async runtime could not start: {0}")]
    Runtime(std::io::Error),

    #[error("password hashing failed")]
    HashingFailed,

    #[error("submission rejected by the endpoint")]
    SubmissionRejected,
}
