//! Mapping errors

use thiserror::Error;

/// Result type for mapping operations.
pub type MapResult<T> = Result<T, MapError>;

/// Failure while mapping a validated form to its persistence shape.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MapError {
    /// A decimal string did not parse to a number. Validated forms
    /// never hit this; it guards direct mapper calls on raw data.
    #[error("invalid decimal amount '{value}'")]
    InvalidDecimal { value: String },
}
