//! Connection handling for remote MCP servers.
//!
//! The prober only talks to the network through [`Connector`] and
//! [`Session`]. [`StreamableHttpConnector`] is the production
//! implementation, built on rmcp's streamable HTTP client transport.

use crate::{
    capability::{CallError, Capability},
    error::Error,
};
use rmcp::{
    RoleClient, ServiceExt,
    service::RunningService,
    transport::{StreamableHttpClientTransport, streamable_http_client::StreamableHttpClientTransportConfig},
};

mod session;

/// Opens one fresh session per call; sessions are never pooled.
pub trait Connector: Send + Sync + 'static {
    /// The live connection produced by a successful handshake.
    type Session: Session;

    /// Bind a transport to `url` and complete the protocol handshake.
    fn connect(&self, url: &str) -> impl Future<Output = Result<Self::Session, Error>> + Send;
}

/// Capability calls against a connected MCP server.
pub trait Session: Send + Sync {
    /// Invoke one standard list method with no arguments, discarding the payload.
    fn call(&self, capability: Capability) -> impl Future<Output = Result<(), CallError>> + Send;

    /// Release the underlying connection.
    fn close(self) -> impl Future<Output = ()> + Send;
}

/// Connects over rmcp's streamable HTTP client transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreamableHttpConnector;

impl Connector for StreamableHttpConnector {
    type Session = RunningService<RoleClient, ()>;

    async fn connect(&self, url: &str) -> Result<Self::Session, Error> {
        let config = StreamableHttpClientTransportConfig {
            uri: url.to_owned().into(),
            ..Default::default()
        };
        let transport = StreamableHttpClientTransport::from_config(config);
        let service = ().serve(transport).await.map_err(Box::new)?;
        Ok(service)
    }
}
