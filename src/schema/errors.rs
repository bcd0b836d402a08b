//! Schema validation errors
//!
//! A failed validation carries one message per offending field - the
//! first rule violated for that field. The map is ordered so error
//! output is deterministic.

use std::collections::BTreeMap;
use std::fmt;

/// Field-indexed validation failure.
///
/// The UI renders each entry as inline per-field text; the CLI prints
/// them one per line. Multiple simultaneous violations on one field do
/// not stack: only the first violated rule's message is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    fields: BTreeMap<String, String>,
}

impl ValidationError {
    /// Builds the error from collected per-field messages.
    ///
    /// Callers must guarantee the map is non-empty; an empty map would
    /// represent a successful validation.
    pub(crate) fn new(fields: BTreeMap<String, String>) -> Self {
        debug_assert!(!fields.is_empty());
        Self { fields }
    }

    /// The candidate was not a JSON object at all.
    pub(crate) fn not_an_object() -> Self {
        let mut fields = BTreeMap::new();
        fields.insert("$root".to_string(), "expected an object".to_string());
        Self { fields }
    }

    /// Per-field messages, ordered by field name.
    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    /// Message for one field, if that field was rejected.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Number of rejected fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no field was rejected. Kept for completeness; a
    /// constructed `ValidationError` always carries at least one entry.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed: ")?;
        let mut first = true;
        for (field, message) in &self.fields {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, ValidationError>;
