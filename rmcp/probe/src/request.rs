//! Validation of incoming probe requests.
//!
//! A [`ProbeRequest`] can only be built from input whose `url` is a non-empty
//! string with an `http://` or `https://` scheme, so nothing unvalidated ever
//! reaches the transport.

use crate::error::Error;
use serde_json::Value;

/// A validated request to probe one remote MCP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRequest {
    url: String,
}

impl ProbeRequest {
    /// Validate a bare URL.
    pub fn new(url: impl Into<String>) -> Result<Self, Error> {
        let url = url.into();
        if url.is_empty() {
            return Err(Error::InvalidInput);
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::InvalidScheme);
        }
        Ok(Self { url })
    }

    /// Extract and validate the `url` field of a JSON request body.
    ///
    /// Any other field is ignored. A body that is not an object, or whose
    /// `url` is absent or not a string, is [`Error::InvalidInput`].
    pub fn from_json(body: &Value) -> Result<Self, Error> {
        let url = body
            .get("url")
            .and_then(Value::as_str)
            .ok_or(Error::InvalidInput)?;
        Self::new(url)
    }

    /// The validated target URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}
