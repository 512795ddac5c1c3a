//! Error types for summarization requests.

use thiserror::Error;

/// Errors that can occur while requesting a summary.
///
/// The controller shows the same message for every variant; the variants
/// exist so the log says what actually went wrong.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// Connection, timeout or body read failure.
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status code.
    #[error("service returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not valid JSON.
    #[error("response body is not valid JSON: {0}")]
    InvalidBody(#[from] serde_json::Error),

    /// The JSON body has no `summary` field, or it is null.
    #[error("response has no `summary` field")]
    MissingSummary,

    /// The `summary` field is present but not a string.
    #[error("`summary` field has type {found}, expected string")]
    UnexpectedSummaryType { found: &'static str },
}

impl SummarizeError {
    /// Short category name for structured log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            SummarizeError::Transport(_) => "transport",
            SummarizeError::Status { .. } => "status",
            SummarizeError::InvalidBody(_) => "invalid_body",
            SummarizeError::MissingSummary => "missing_summary",
            SummarizeError::UnexpectedSummaryType { .. } => "unexpected_summary_type",
        }
    }
}
