use crate::ShareError;
use serde::{Deserialize, Serialize};

/// Outcome of a single share attempt.
///
/// Serializes as `{"status":"success"}` or
/// `{"status":"failure","message":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum ShareResult {
    /// The host accepted the request for dispatch.
    Success,
    /// The attempt failed; the message is meant for the end user.
    Failure(String),
}

impl ShareResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ShareResult::Success)
    }

    /// Failure message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            ShareResult::Success => None,
            ShareResult::Failure(message) => Some(message),
        }
    }
}

impl From<Result<(), ShareError>> for ShareResult {
    fn from(outcome: Result<(), ShareError>) -> Self {
        match outcome {
            Ok(()) => ShareResult::Success,
            Err(err) => ShareResult::Failure(err.to_string()),
        }
    }
}
