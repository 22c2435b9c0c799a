//! Fetch failures.

use thiserror::Error;

/// Why a lookup did not produce a result set.
///
/// Every variant is recoverable: the event loop stores it as the last error
/// and keeps running.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request URL could not be built.
    #[error("invalid request: {0}")]
    Request(String),

    /// The network call failed before a response arrived.
    #[error("network error: {0}")]
    Transport(String),

    /// No response within the deadline.
    #[error("request timed out")]
    Timeout,

    /// The server answered with a non-success status.
    #[error("server returned HTTP {0}")]
    Status(u16),

    /// The body was not the expected JSON.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// A newer request replaced this one.
    #[error("request cancelled")]
    Cancelled,
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_builder() {
            FetchError::Request(err.to_string())
        } else if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}
