//! Submission client
//!
//! POSTs the JSON-serialized persist record to the registration
//! endpoint and classifies the response. The endpoint's only
//! distinguished failure is 400, which it uses to report a duplicate
//! email address; everything else is a generic rejection.

use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::observability::Logger;

use super::errors::SubmitResult;

/// Outcome of one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Any 2xx: the record was stored.
    Saved,
    /// 400: the endpoint reports the email is already registered.
    DuplicateEmail,
    /// Any other status, carried for diagnostics.
    Rejected(u16),
}

impl SubmitOutcome {
    /// User-facing message for this outcome.
    pub fn message(&self) -> String {
        match self {
            SubmitOutcome::Saved => "records saved".to_string(),
            SubmitOutcome::DuplicateEmail => "duplicate email address".to_string(),
            SubmitOutcome::Rejected(_) => "the records could not be saved".to_string(),
        }
    }

    /// True when the record was stored.
    pub fn is_saved(&self) -> bool {
        matches!(self, SubmitOutcome::Saved)
    }
}

/// Maps a response status to its outcome.
pub fn classify_status(status: StatusCode) -> SubmitOutcome {
    if status.is_success() {
        SubmitOutcome::Saved
    } else if status == StatusCode::BAD_REQUEST {
        SubmitOutcome::DuplicateEmail
    } else {
        SubmitOutcome::Rejected(status.as_u16())
    }
}

/// Submits a persisted record to the registration endpoint.
///
/// Returns the classified outcome; only transport failures are errors.
pub async fn submit_record(client: &Client, url: &str, record: &Value) -> SubmitResult<SubmitOutcome> {
    let response = client.post(url).json(record).send().await?;
    let outcome = classify_status(response.status());

    match outcome {
        SubmitOutcome::Saved => Logger::info("SUBMIT_SAVED", &[("url", url)]),
        SubmitOutcome::DuplicateEmail => Logger::warn("SUBMIT_DUPLICATE_EMAIL", &[("url", url)]),
        SubmitOutcome::Rejected(status) => Logger::warn(
            "SUBMIT_REJECTED",
            &[("url", url), ("status", &status.to_string())],
        ),
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_2xx_is_saved() {
        for code in [200u16, 201, 204] {
            let status = StatusCode::from_u16(code).unwrap();
            assert_eq!(classify_status(status), SubmitOutcome::Saved);
        }
    }

    #[test]
    fn test_400_means_duplicate_email() {
        assert_eq!(
            classify_status(StatusCode::BAD_REQUEST),
            SubmitOutcome::DuplicateEmail
        );
    }

    #[test]
    fn test_other_statuses_are_generic_rejections() {
        for code in [401u16, 404, 409, 500, 503] {
            let status = StatusCode::from_u16(code).unwrap();
            assert_eq!(classify_status(status), SubmitOutcome::Rejected(code));
        }
    }

    #[test]
    fn test_outcome_messages() {
        assert!(SubmitOutcome::Saved.is_saved());
        assert!(!SubmitOutcome::DuplicateEmail.is_saved());
        assert_ne!(
            SubmitOutcome::DuplicateEmail.message(),
            SubmitOutcome::Rejected(500).message()
        );
    }
}
