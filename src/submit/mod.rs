//! HTTP submission
//!
//! One fire-and-forget POST of a persisted record per user action.
//! There is no retry and no in-flight de-duplication: overlapping
//! submissions from rapid repeated user actions are possible and are
//! not guarded against here.

mod client;
mod errors;

pub use client::{classify_status, submit_record, SubmitOutcome};
pub use errors::{SubmitError, SubmitResult};
