//! Transport layer error definitions.

use thiserror::Error;

use crate::domain::RepositoryError;

/// Errors raised by the HTTP transport.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection-level failure or body decode failure from reqwest
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// 401/403 — the bearer token is missing, expired or rejected
    #[error("unauthorized: bearer token missing or rejected")]
    Unauthorized,

    /// Any other non-2xx status
    #[error("unexpected HTTP status {0}")]
    Status(u16),
}

impl From<ApiError> for RepositoryError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Request(inner) if inner.is_decode() => {
                RepositoryError::Decode(inner.to_string())
            }
            ApiError::Request(inner) => RepositoryError::Transport(inner.to_string()),
            ApiError::Unauthorized => RepositoryError::Unauthorized,
            ApiError::Status(status) => RepositoryError::Status(status),
        }
    }
}
