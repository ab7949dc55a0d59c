use thiserror::Error;

use crate::types::ResponseResult;

/// Result type alias for AutoDNS operations
pub type Result<T> = std::result::Result<T, AutoDnsError>;

/// Errors that can occur when talking to the AutoDNS gateway
#[derive(Error, Debug)]
pub enum AutoDnsError {
    /// The gateway answered with an error-prefixed status code.
    ///
    /// Carries the complete `<result>` block (status, messages and any
    /// partial data) so callers can inspect what the server reported.
    #[error("gateway error ({}): {}", .0.status.code, .0.status.text.as_deref().unwrap_or("no status text"))]
    Protocol(Box<ResponseResult>),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Request timed out
    #[error("request timed out")]
    Timeout,

    /// Connection failed
    #[error("connection failed: {0}")]
    Connection(String),

    /// Response body is not well-formed XML
    #[error("XML parse error: {0}")]
    Xml(String),

    /// Response is well-formed XML but lacks the `response/result/status` frame
    #[error("malformed gateway response: {0}")]
    MalformedResponse(String),

    /// Request or response bytes are not valid UTF-8, or the writer failed
    #[error("encoding error: {0}")]
    Encoding(String),

    /// JSON conversion of a payload failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Command cannot be written as a valid request
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl AutoDnsError {
    /// Returns true if the gateway itself rejected the command
    #[must_use]
    pub const fn is_protocol(&self) -> bool {
        matches!(self, Self::Protocol(_))
    }

    /// Returns true if the error happened before any response body existed
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Timeout | Self::Connection(_))
    }

    /// Returns the gateway status code if this is a protocol error
    #[must_use]
    pub fn status_code(&self) -> Option<&str> {
        match self {
            Self::Protocol(result) => Some(result.status.code.as_str()),
            _ => None,
        }
    }

    /// Returns the parsed `<result>` block if this is a protocol error
    #[must_use]
    pub fn response(&self) -> Option<&ResponseResult> {
        match self {
            Self::Protocol(result) => Some(result),
            _ => None,
        }
    }
}
