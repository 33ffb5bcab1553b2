//! Routes for registered MCP servers.
//!
//! Record storage lives elsewhere; this module only serves connection
//! testing.

use axum::{Json, Router, body::Bytes, extract::State, routing::post};
use rmcp_probe::{Connector, Prober, Verdict};
use serde_json::Value;
use std::sync::Arc;

pub fn router<C: Connector>(prober: Arc<Prober<C>>) -> Router {
    Router::new()
        .route("/api/mcp/test-connection", post(test_connection::<C>))
        .with_state(prober)
}

/// Probe the URL in the request body and report what the server supports.
///
/// Always answers 200 with a verdict. A body that is not JSON is treated
/// the same as one without a `url`.
pub async fn test_connection<C: Connector>(
    State(prober): State<Arc<Prober<C>>>,
    body: Bytes,
) -> Json<Verdict> {
    let body = serde_json::from_slice(&body).unwrap_or(Value::Null);
    Json(prober.probe(&body).await)
}
