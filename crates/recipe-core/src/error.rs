//! Error Types
//!
//! Network/API failures, wiring mistakes and configuration problems.
//! Field validation failures are not errors; see [`crate::validation`].

use thiserror::Error;

/// Common result type for backend calls
pub type ApiResult<T> = Result<T, ApiError>;

/// A failed request against the REST backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),
    /// 401 or 403; the session is missing or expired
    #[error("not authorized")]
    Unauthorized,
    #[error("not found")]
    NotFound,
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
    /// The response body did not match the expected shape
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Map a non-success HTTP status to an error
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        match status {
            401 | 403 => ApiError::Unauthorized,
            404 => ApiError::NotFound,
            _ => ApiError::Status {
                status,
                message: message.into(),
            },
        }
    }

    /// Whether cached identity must be dropped after this failure
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::from_status(status.as_u16(), err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Programmer errors: a form was wired with a value no page should produce
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("'{0}' is an invalid user context")]
    UnknownContext(String),
    #[error("'{0}' is not an allowed input type (text, number, email, password)")]
    UnsupportedInputKind(String),
}

/// Client configuration could not be read
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
