use thiserror::Error;

/// Fallback text when the transport reports a handshake failure without a message.
pub const CONNECTION_FAILED: &str = "MCP connection failed.";

/// Failures that end a probe before any capability is queried.
///
/// The `Display` text of each variant is the exact `error` string of the
/// resulting verdict.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Missing or invalid URL.")]
    InvalidInput,

    #[error("URL must start with http:// or https://.")]
    InvalidScheme,

    #[error("{0}")]
    Handshake(String),

    #[error("timed out")]
    Timeout,
}

impl Error {
    /// Wrap a handshake failure message, substituting [`CONNECTION_FAILED`]
    /// when the transport gave nothing usable.
    pub fn handshake(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Error::Handshake(CONNECTION_FAILED.into())
        } else {
            Error::Handshake(message)
        }
    }
}

impl From<Box<rmcp::service::ClientInitializeError>> for Error {
    fn from(err: Box<rmcp::service::ClientInitializeError>) -> Self {
        Error::handshake(err.to_string())
    }
}
