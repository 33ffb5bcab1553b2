//! Standard MCP capabilities and the classification of their probe results.

use rmcp::{ServiceError, model::ErrorCode};
use serde::{Serialize, Serializer, ser::SerializeStruct};
use std::fmt;

/// Text recorded for a capability the server reports as unimplemented.
pub const METHOD_NOT_FOUND: &str = "Method not found (-32601)";

/// Text recorded when a failure carries no message.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// One of the standard list methods every probe attempts.
///
/// Ordering follows declaration order, which is also the probe order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Capability {
    ListPrompts,
    ListResources,
    ListTools,
}

impl Capability {
    /// All capabilities, in probe order.
    pub const ALL: [Capability; 3] = [
        Capability::ListPrompts,
        Capability::ListResources,
        Capability::ListTools,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Capability::ListPrompts => "listPrompts",
            Capability::ListResources => "listResources",
            Capability::ListTools => "listTools",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a single capability call failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallError {
    /// The server answered with JSON-RPC `-32601`.
    MethodNotFound,
    /// Any other failure, with the transport's message.
    Failed(String),
    /// The call exceeded the probe timeout.
    Timeout,
}

impl CallError {
    /// Classify a failure known only by its text.
    ///
    /// Used for transports that cannot expose a structured error code.
    pub fn from_message(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.contains("-32601") {
            CallError::MethodNotFound
        } else {
            CallError::Failed(message)
        }
    }

    /// The text recorded in the outcome's `error` field.
    pub fn message(&self) -> &str {
        match self {
            CallError::MethodNotFound => METHOD_NOT_FOUND,
            CallError::Failed(message) if message.trim().is_empty() => UNKNOWN_ERROR,
            CallError::Failed(message) => message,
            CallError::Timeout => "timed out",
        }
    }
}

impl fmt::Display for CallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for CallError {}

impl From<ServiceError> for CallError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::McpError(data) if data.code == ErrorCode::METHOD_NOT_FOUND => {
                CallError::MethodNotFound
            }
            ServiceError::McpError(data) => CallError::from_message(data.message.into_owned()),
            other => CallError::from_message(other.to_string()),
        }
    }
}

/// Result of probing one capability.
///
/// Serialises as `{ "ok": bool, "error"?: string }`; the name is the key
/// under which the outcome is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub name: Capability,
    pub result: Result<(), CallError>,
}

impl ProbeOutcome {
    pub fn new(name: Capability, result: Result<(), CallError>) -> Self {
        Self { name, result }
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    pub fn is_method_not_found(&self) -> bool {
        matches!(self.result, Err(CallError::MethodNotFound))
    }

    pub fn error(&self) -> Option<&str> {
        self.result.as_ref().err().map(CallError::message)
    }
}

impl Serialize for ProbeOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let error = self.error();
        let len = if error.is_some() { 2 } else { 1 };
        let mut state = serializer.serialize_struct("ProbeOutcome", len)?;
        state.serialize_field("ok", &self.is_ok())?;
        if let Some(error) = error {
            state.serialize_field("error", error)?;
        } else {
            state.skip_field("error")?;
        }
        state.end()
    }
}
