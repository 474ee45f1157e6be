//! Error types for remote store operations.

use thiserror::Error;

/// Errors surfaced by the remote event store.
///
/// There are deliberately only two kinds: a missing record is reported the
/// same way as any other non-success response.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Network failure or non-success HTTP status.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The response body was not a well-formed event payload.
    #[error("Malformed response: {0}")]
    Decode(String),
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        StoreError::Transport(err.to_string())
    }
}
