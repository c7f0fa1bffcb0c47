//! Gateway error types
//!
//! Two families of failure are kept apart:
//! - **application** errors: the server answered `success: false`
//! - **transport** errors: the exchange itself failed (network, timeout,
//!   unparseable body) or never started (no credential)

use thiserror::Error;

/// Errors returned by [`Gateway`](super::Gateway) calls
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Not signed in")]
    MissingCredential,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Request timeout")]
    Timeout,

    #[error("Server unavailable")]
    Unavailable,

    #[error("Invalid response (HTTP {status}): {message}")]
    Decode { status: u16, message: String },

    /// The server said `success: false`; `message` is its text verbatim
    #[error("{message}")]
    Application { status: u16, message: String },
}

impl GatewayError {
    /// Map a reqwest error the same way for every call
    pub(crate) fn from_send(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            GatewayError::Timeout
        } else if e.is_connect() {
            GatewayError::Unavailable
        } else {
            GatewayError::Request(e)
        }
    }

    pub fn application(message: impl Into<String>) -> Self {
        GatewayError::Application {
            status: 200,
            message: message.into(),
        }
    }

    pub fn is_transport(&self) -> bool {
        !matches!(self, GatewayError::Application { .. })
    }

    /// Server-provided message for application errors
    pub fn server_message(&self) -> Option<&str> {
        match self {
            GatewayError::Application { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;
