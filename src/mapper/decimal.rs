//! Decimal normalization
//!
//! Monetary amounts travel as text until they reach the mapper; the
//! persistence layer stores them as DECIMAL(14,4) numbers. The
//! four-digit precision is a storage convention - no rounding happens
//! here.

use serde::{Deserialize, Serialize};

use super::errors::{MapError, MapResult};

/// A monetary amount as it reaches the mapper: either the raw text the
/// UI collected or an already-normalized number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DecimalValue {
    Number(f64),
    Text(String),
}

impl From<&str> for DecimalValue {
    fn from(s: &str) -> Self {
        DecimalValue::Text(s.to_string())
    }
}

impl From<String> for DecimalValue {
    fn from(s: String) -> Self {
        DecimalValue::Text(s)
    }
}

impl From<f64> for DecimalValue {
    fn from(n: f64) -> Self {
        DecimalValue::Number(n)
    }
}

/// Normalizes a decimal value for persistence.
///
/// Numeric input is returned unchanged, so feeding an already-mapped
/// record through again is a no-op. Text input is parsed as a number;
/// an unparsable string is an error rather than a NaN that would
/// silently reach the persisted record.
pub fn to_decimal4(value: DecimalValue) -> MapResult<f64> {
    match value {
        DecimalValue::Number(n) => Ok(n),
        DecimalValue::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| MapError::InvalidDecimal { value: s }),
    }
}
