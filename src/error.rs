//! Error types shared across the crate.
//!
//! Every fallible operation returns [`LlmError`]. Conversion and translation
//! failures never result in a partial vendor call: the request is either
//! fully converted or rejected before any HTTP traffic happens.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Error, Debug)]
pub enum LlmError {
    /// Invalid or missing configuration, e.g. no API key at initialization.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// A request shape this plugin cannot express in the vendor format:
    /// an unsupported part kind under a role, a system message without a
    /// leading text part, an output format with no vendor counterpart.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Structured data from the vendor could not be decoded, e.g. a tool
    /// call whose arguments string is not valid JSON.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// JSON serialization/deserialization failure.
    #[error("JSON error: {0}")]
    JsonError(String),

    /// Transport-level failure from the HTTP client.
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// A non-success reply from the vendor API, passed through without
    /// retry. The body text is preserved in `message`.
    #[error("API error {code}: {message}")]
    ApiError {
        /// HTTP status code.
        code: u16,
        /// Response body, verbatim.
        message: String,
    },
}

impl LlmError {
    /// Create an API error from a status code and response body.
    pub fn api_error(code: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            code,
            message: message.into(),
        }
    }

    /// HTTP status code when the error carries one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        Self::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for LlmError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}
