//! Client-side error types

use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by [`crate::SessionClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connection refused, timeout, bad TLS).
    #[error("http transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a structured error envelope.
    #[error("api error {status}: {code}: {message}")]
    Api {
        status: StatusCode,
        code: String,
        message: String,
    },

    /// The server answered with a body the client could not interpret.
    #[error("unexpected response body (status {status})")]
    UnexpectedBody { status: StatusCode },

    /// The refresh cookie is gone or revoked; the user must log in again.
    #[error("session expired")]
    SessionExpired,
}

impl ClientError {
    /// HTTP status of the underlying response, when one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Transport(e) => e.status(),
            Self::Api { status, .. } | Self::UnexpectedBody { status } => Some(*status),
            Self::SessionExpired => Some(StatusCode::UNAUTHORIZED),
        }
    }
}

/// Result alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
