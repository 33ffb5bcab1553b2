//! # wmcp-console
//!
//! HTTP backend for managing registered MCP servers. Exposes connection
//! testing, which probes a remote server with [`rmcp_probe`] and returns
//! its verdict as JSON.

use axum::Router;
use rmcp_probe::{Connector, Prober};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod routes;

pub use config::Config;

/// Build the application router around a prober.
pub fn app<C: Connector>(prober: Prober<C>) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::mcp::router(Arc::new(prober)))
        .layer(TraceLayer::new_for_http())
}

/// Bind `config.bind` and serve until the process is stopped.
pub async fn serve(config: Config) -> std::io::Result<()> {
    let prober = Prober::streamable_http().with_timeout(config.probe_timeout());
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!("wmcp-console listening on {}", listener.local_addr()?);
    axum::serve(listener, app(prober)).await
}
