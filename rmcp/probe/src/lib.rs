//! # rmcp-probe
//!
//! Determine whether a URL hosts a working MCP server and which of the
//! standard list methods (`listPrompts`, `listResources`, `listTools`) it
//! supports.
//!
//! ```rust,ignore
//! use rmcp_probe::Prober;
//!
//! let verdict = Prober::streamable_http()
//!     .probe(&serde_json::json!({ "url": "http://localhost:4000/mcp" }))
//!     .await;
//! println!("{}", serde_json::to_string_pretty(&verdict)?);
//! ```

pub mod capability;
pub mod client;
pub mod cmd;
pub mod error;
pub mod probe;
pub mod request;
pub mod verdict;

pub use capability::{CallError, Capability, ProbeOutcome};
pub use client::{Connector, Session, StreamableHttpConnector};
pub use error::Error;
pub use probe::{DEFAULT_TIMEOUT, Prober};
pub use request::ProbeRequest;
pub use verdict::Verdict;
