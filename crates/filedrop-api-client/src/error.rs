//! Error types for the Filedrop API client.
//!
//! Every failure propagates to the caller; nothing is retried or recovered
//! here. Transport and JSON-decode failures surface verbatim, while a
//! non-success HTTP status is folded into the fixed-message
//! [`ClientError::Upload`].

use thiserror::Error;

/// Client operation errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network-level failure (DNS, connect, timeout, interrupted body read).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success HTTP status. The message is
    /// fixed; the status and response body are kept for callers that need
    /// the detail.
    #[error("Error sending file")]
    Upload {
        status: reqwest::StatusCode,
        body: String,
    },

    /// A success response carried a body that is not valid JSON.
    #[error(transparent)]
    Parse(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
