//! Reduction of per-capability outcomes into one verdict.

use crate::{
    capability::{Capability, ProbeOutcome},
    error::Error,
};
use serde::Serialize;
use std::collections::BTreeMap;

/// Error when the handshake succeeded but every capability was not found.
pub const NO_STANDARD_CAPABILITY: &str = "The MCP server responded, but does not support any of \
    the standard MCP features (listPrompts, listResources, or listTools). Please verify the \
    server implementation or try a different server.";

/// Error when every capability failed for mixed or non-protocol reasons.
pub const UNREACHABLE: &str = "Could not connect to the MCP server or it does not support any \
    standard features (prompts, resources, or tools). Please check the server URL and ensure it \
    is a valid MCP server.";

/// Outcomes keyed by capability, iterated in probe order.
pub type Capabilities = BTreeMap<Capability, ProbeOutcome>;

/// The single structured answer to a probe request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Capabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Verdict {
    /// A probe that ended before any capability was attempted.
    pub fn failed(err: &Error) -> Self {
        Self {
            ok: false,
            capabilities: None,
            error: Some(err.to_string()),
        }
    }

    /// Fold capability outcomes into a verdict.
    ///
    /// Success is the OR of every outcome. When nothing succeeded, an
    /// all-not-found result takes priority over the generic message.
    /// The outcomes are attached either way.
    pub fn aggregate(capabilities: Capabilities) -> Self {
        if capabilities.values().any(ProbeOutcome::is_ok) {
            return Self {
                ok: true,
                capabilities: Some(capabilities),
                error: None,
            };
        }

        let all_not_found = !capabilities.is_empty()
            && capabilities.values().all(ProbeOutcome::is_method_not_found);
        let error = if all_not_found {
            NO_STANDARD_CAPABILITY
        } else {
            UNREACHABLE
        };

        Self {
            ok: false,
            capabilities: Some(capabilities),
            error: Some(error.into()),
        }
    }
}

impl From<Error> for Verdict {
    fn from(err: Error) -> Self {
        Verdict::failed(&err)
    }
}
