//! API error types for the Scalex REST API client.

use thiserror::Error;

/// API-specific error type for the Scalex REST API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Base URL, API key or network type missing at construction
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Required request field absent or blank
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Value outside its allowed set
    #[error("Invalid value for {field}: {value:?}")]
    InvalidEnum {
        /// Name of the constrained field
        field: &'static str,
        /// The rejected value
        value: String,
    },

    /// HTTP verb outside GET/POST/PUT/PATCH/DELETE
    #[error("Unsupported HTTP method: {0:?}")]
    UnsupportedMethod(String),

    /// HTTP/network error from reqwest, including non-2xx statuses
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body is not valid JSON
    #[error("Deserialization error: {0}")]
    Deserialize(String),

    /// Invalid parameter provided
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl ApiError {
    /// Whether the error was raised locally, before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ApiError::MissingField(_) | ApiError::InvalidEnum { .. } | ApiError::UnsupportedMethod(_)
        )
    }

    /// HTTP status of a failed response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
