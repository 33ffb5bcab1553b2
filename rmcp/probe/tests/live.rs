//! End-to-end probes against servers listening on loopback sockets.

use axum::{Router, routing::post};
use rmcp::{
    RoleServer, ServerHandler,
    handler::server::router::tool::ToolRouter,
    model::{
        ErrorCode, ErrorData, Implementation, ListPromptsResult, ListResourcesResult, ListToolsResult,
        PaginatedRequestParams, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router,
    transport::streamable_http_server::{
        StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
    },
};
use rmcp_probe::{Capability, Prober, ProbeRequest};
use serde_json::json;
use std::time::Duration;

/// Minimal MCP server exposing a single tool.
#[derive(Debug, Clone)]
struct PingServer {
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl PingServer {
    fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Reply with pong")]
    async fn ping(&self) -> Result<String, String> {
        Ok("pong".into())
    }
}

#[tool_handler]
impl ServerHandler for PingServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "ping".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            instructions: None,
        }
    }
}

/// Answers the first page of prompts and resources but misbehaves on
/// every later page; tools are not implemented at all.
#[derive(Debug, Clone)]
struct BrokenPagingServer;

impl ServerHandler for BrokenPagingServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder()
                .enable_prompts()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: "broken-paging".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            instructions: None,
        }
    }

    async fn list_prompts(
        &self,
        request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, ErrorData> {
        if request.and_then(|r| r.cursor).is_some() {
            return Err(ErrorData::internal_error("page 2 broken", None));
        }
        let mut result = ListPromptsResult::with_all_items(Vec::new());
        result.next_cursor = Some("page-2".into());
        Ok(result)
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        let mut result = ListResourcesResult::with_all_items(Vec::new());
        result.next_cursor = Some("more".into());
        Ok(result)
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Err(ErrorData::new(ErrorCode::METHOD_NOT_FOUND, "tools/list", None))
    }
}

async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/mcp")
}

async fn spawn_mcp() -> String {
    let service = StreamableHttpService::new(
        || Ok(PingServer::new()),
        LocalSessionManager::default().into(),
        StreamableHttpServerConfig::default(),
    );
    spawn(Router::new().nest_service("/mcp", service)).await
}

#[tokio::test(flavor = "multi_thread")]
async fn first_page_decides_support() {
    let service = StreamableHttpService::new(
        || Ok(BrokenPagingServer),
        LocalSessionManager::default().into(),
        StreamableHttpServerConfig::default(),
    );
    let url = spawn(Router::new().nest_service("/mcp", service)).await;

    let verdict = Prober::streamable_http()
        .with_timeout(Duration::from_secs(2))
        .probe(&json!({ "url": url }))
        .await;

    assert_eq!(
        serde_json::to_value(verdict).unwrap(),
        json!({
            "ok": true,
            "capabilities": {
                "listPrompts": { "ok": true },
                "listResources": { "ok": true },
                "listTools": { "ok": false, "error": "Method not found (-32601)" }
            }
        })
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn probes_a_live_server() {
    let url = spawn_mcp().await;
    let verdict = Prober::streamable_http().probe(&json!({ "url": url })).await;

    assert!(verdict.ok, "{verdict:?}");
    assert!(verdict.error.is_none());
    let capabilities = verdict.capabilities.expect("capabilities attached");
    assert_eq!(capabilities.len(), 3);
    assert!(capabilities[&Capability::ListTools].is_ok());
}

#[tokio::test(flavor = "multi_thread")]
async fn same_server_twice_gives_same_classification() {
    let url = spawn_mcp().await;
    let prober = Prober::streamable_http();
    let request = ProbeRequest::new(url).unwrap();

    let first = prober.probe_request(&request).await;
    let second = prober.probe_request(&request).await;
    assert_eq!(first.ok, second.ok);
    let outcomes = |v: &rmcp_probe::Verdict| {
        v.capabilities
            .as_ref()
            .map(|c| c.values().map(|o| (o.name, o.is_ok())).collect::<Vec<_>>())
    };
    assert_eq!(outcomes(&first), outcomes(&second));
}

#[tokio::test(flavor = "multi_thread")]
async fn refused_connection_has_no_capabilities() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let verdict = Prober::streamable_http()
        .with_timeout(Duration::from_secs(5))
        .probe(&json!({ "url": format!("http://{addr}/mcp") }))
        .await;

    assert!(!verdict.ok);
    assert!(verdict.capabilities.is_none());
    assert!(!verdict.error.unwrap_or_default().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn plain_http_endpoint_fails_handshake() {
    let url = spawn(Router::new()).await;
    let verdict = Prober::streamable_http()
        .with_timeout(Duration::from_secs(5))
        .probe(&json!({ "url": url }))
        .await;

    assert!(!verdict.ok);
    assert!(verdict.capabilities.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn silent_server_times_out() {
    async fn never() -> &'static str {
        std::future::pending::<()>().await;
        "unreachable"
    }
    let url = spawn(Router::new().route("/mcp", post(never))).await;

    let verdict = Prober::streamable_http()
        .with_timeout(Duration::from_millis(200))
        .probe(&json!({ "url": url }))
        .await;

    assert_eq!(
        serde_json::to_value(verdict).unwrap(),
        json!({ "ok": false, "error": "timed out" })
    );
}
