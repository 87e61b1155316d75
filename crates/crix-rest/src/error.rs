//! Error types for REST API operations

use crix_auth::AuthError;

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// The exchange answered with a status other than 200 or 204
    #[error("API ({operation}) error: code {code}: {text}")]
    Api {
        /// Operation that failed (e.g. "fetch-order")
        operation: String,
        /// HTTP status code
        code: u16,
        /// Raw response body
        text: String,
    },

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-reqwest transport failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// Failed to parse response
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid request parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Missing API credentials for private endpoint
    #[error("Authentication required for this endpoint")]
    AuthRequired,

    /// Credentials could not be built
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl RestError {
    /// Create an API error
    pub fn api(operation: impl Into<String>, code: u16, text: impl Into<String>) -> Self {
        Self::Api {
            operation: operation.into(),
            code,
            text: text.into(),
        }
    }

    /// HTTP status code, for API errors
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { code, .. } => Some(*code),
            Self::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Raw response body, for API errors
    pub fn body_text(&self) -> Option<&str> {
        match self {
            Self::Api { text, .. } => Some(text.as_str()),
            _ => None,
        }
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// Statuses the exchange uses for success
const SUCCESS_CODES: [u16; 2] = [200, 204];

/// Fail with [`RestError::Api`] unless `status` is 200 or 204
///
/// This is the only check made before the body is parsed as JSON.
pub fn ensure(operation: &str, status: u16, body_text: &str) -> RestResult<()> {
    if SUCCESS_CODES.contains(&status) {
        Ok(())
    } else {
        Err(RestError::api(operation, status, body_text))
    }
}

/// True if the error is the exchange's textual "not found" answer
///
/// The exchange has no structured code for a missing resource, so this
/// matches on the response body. Only the single-order lookup treats it as
/// an absent result; everywhere else it is an ordinary API error.
pub fn is_not_found(err: &RestError) -> bool {
    matches!(err, RestError::Api { text, .. } if text.contains("not found"))
}
