//! Provider error types.
//!
//! Each remote provider gets its own error enum so callers can tell a
//! transport problem from a response that did not have the expected shape.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure talking to the trends provider
#[derive(Debug, Error)]
pub enum TrendsError {
    #[error("trends request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("trends provider returned HTTP {0}")]
    Status(StatusCode),

    #[error("trends response is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("trends response has no TIMESERIES widget")]
    MissingWidget,

    #[error("trends response has an invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

/// Failure talking to the autocomplete provider
#[derive(Debug, Error)]
pub enum SuggestError {
    #[error("suggestion request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("suggestion provider returned HTTP {0}")]
    Status(StatusCode),

    #[error("suggestion response is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unexpected suggestion response shape: {0}")]
    UnexpectedShape(String),
}
