//! JSON bodies exchanged between the form and the summary endpoint

use serde::{Deserialize, Serialize};

/// A validated summary request: both fields are non-empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    /// Book title
    pub book_name: String,

    /// Book author
    pub author: String,
}

/// Successful endpoint response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// Summary text produced by the provider
    pub summary: String,
}

/// Failure response for 4xx/5xx statuses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short, user-facing description
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
