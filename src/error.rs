//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors.
///
/// Only two kinds exist upstream of the load boundary: transport failures and
/// protocol failures. A protocol failure is either a non-2xx status or a body
/// that does not decode.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HttpError {
    /// Connectivity, timeout or body-read failure.
    #[error("Request failed: {0}")]
    Transport(String),

    /// Non-2xx response. `message` is what the upstream said, if anything.
    #[error("Status {status}: {}", message.as_deref().unwrap_or("<no message>"))]
    Status { status: u16, message: Option<String> },

    /// 2xx response whose body is not the expected JSON.
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl HttpError {
    /// The user-facing message carried by this failure, if any.
    ///
    /// Blank messages count as absent so callers can substitute their own
    /// fallback copy.
    pub fn message(&self) -> Option<&str> {
        let message = match self {
            HttpError::Transport(m) => Some(m.as_str()),
            HttpError::Status { message, .. } => message.as_deref(),
            HttpError::Decode(m) => Some(m.as_str()),
        };
        message.map(str::trim).filter(|m| !m.is_empty())
    }

    /// HTTP status for protocol failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, HttpError::Transport(_))
    }

    pub fn is_protocol(&self) -> bool {
        !self.is_transport()
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for HttpError {
    fn from(e: reqwest::Error) -> Self {
        HttpError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for HttpError {
    fn from(e: serde_json::Error) -> Self {
        HttpError::Decode(e.to_string())
    }
}
