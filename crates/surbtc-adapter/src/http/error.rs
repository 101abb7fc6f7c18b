/*
[INPUT]:  Error sources (transport, HTTP status, unsupported operations)
[OUTPUT]: Structured error types carrying response detail
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use serde_json::Value;
use thiserror::Error;

/// Main error type for the SurBTC adapter.
#[derive(Error, Debug)]
pub enum SurbtcError {
    /// HTTP client construction or plumbing failed
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Transport-level failure (DNS, connection refused, TLS). The code is
    /// best-effort and usually 0 since no HTTP status was obtained.
    #[error("transport failure (code {code}): {message}")]
    Transport { code: u16, message: String },

    /// The server answered with a status outside {200, 201}. Carries the
    /// decoded response body (null when the body was not valid JSON).
    #[error("API error (status {code}): {body}")]
    Api { code: u16, body: Value },

    /// Operation the exchange API does not support through this client
    #[error("operation not supported: {operation}")]
    Unsupported { operation: &'static str },

    /// URL parsing failed
    #[error("invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl SurbtcError {
    /// HTTP status associated with the failure, when one exists.
    pub fn status(&self) -> Option<u16> {
        match self {
            SurbtcError::Api { code, .. } => Some(*code),
            SurbtcError::Transport { code, .. } if *code != 0 => Some(*code),
            _ => None,
        }
    }

    /// True when the failure happened before any HTTP status existed.
    pub fn is_transport(&self) -> bool {
        matches!(self, SurbtcError::Transport { .. } | SurbtcError::Http(_))
    }

    /// True when the server answered with a non-success status.
    pub fn is_api(&self) -> bool {
        matches!(self, SurbtcError::Api { .. })
    }
}

/// Result type alias for SurBTC operations.
pub type Result<T> = std::result::Result<T, SurbtcError>;
