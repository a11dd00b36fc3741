//! Error Types

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failure talking to the counter API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("Error: {status}")]
    Status { status: u16 },
    #[error("invalid response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status { status: status.as_u16() }
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// Failure reading or writing the local key-value store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to write {key}: {message}")]
    Write { key: String, message: String },
    #[error("failed to encode value: {0}")]
    Encode(String),
}

/// Failure submitting a mutation form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    #[error("required fields are missing")]
    Invalid,
    #[error(transparent)]
    Api(#[from] ApiError),
}
