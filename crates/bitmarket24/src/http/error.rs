/*
[INPUT]:  Error sources (transport, remote status, serialization, credentials, configuration)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Bitmarket24 client
#[derive(Error, Debug)]
pub enum Bitmarket24Error {
    /// Network or connection failure, surfaced as reported by the transport
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status on an endpoint that expects JSON
    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    /// Client is missing something it needs to build the request
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Token could not be signed or decoded
    #[error("Credential error: {0}")]
    Credential(String),

    /// Token is past its `exp` claim
    #[error("Token expired")]
    TokenExpired,

    /// Token signature does not match the secret
    #[error("Invalid token signature")]
    InvalidSignature,

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl Bitmarket24Error {
    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        match self {
            Bitmarket24Error::Credential(_)
            | Bitmarket24Error::TokenExpired
            | Bitmarket24Error::InvalidSignature => true,
            Bitmarket24Error::Api { status, .. } => *status == 401 || *status == 403,
            _ => false,
        }
    }

    /// Check if the request never produced a response
    pub fn is_transport_error(&self) -> bool {
        matches!(self, Bitmarket24Error::Http(_))
    }

    /// HTTP status attached to the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Bitmarket24Error::Api { status, .. } => Some(*status),
            Bitmarket24Error::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Create an API error from status code and response body
    pub fn api_error(status: StatusCode, body: impl Into<String>) -> Self {
        Bitmarket24Error::Api {
            status: status.as_u16(),
            body: body.into(),
        }
    }

    pub(crate) fn no_market() -> Self {
        Bitmarket24Error::Configuration("no market specified".to_string())
    }
}

/// Result type alias for Bitmarket24 operations
pub type Result<T> = std::result::Result<T, Bitmarket24Error>;
