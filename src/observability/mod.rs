//! Observability subsystem
//!
//! Structured logging for the submission path and the CLI:
//! - one JSON line per event
//! - deterministic key ordering
//! - synchronous, no buffering
//!
//! Observability is read-only; nothing here affects validation,
//! mapping, or submission outcomes.

mod logger;

pub use logger::{Logger, Severity};
