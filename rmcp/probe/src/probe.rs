//! The capability prober.
//!
//! One call to [`Prober::probe`] validates the request, performs a single
//! handshake, attempts every [`Capability`] in order and aggregates the
//! outcomes. Every failure is converted into the returned [`Verdict`].

use crate::{
    capability::{CallError, Capability, ProbeOutcome},
    client::{Connector, Session, StreamableHttpConnector},
    error::Error,
    request::ProbeRequest,
    verdict::{Capabilities, Verdict},
};
use serde_json::Value;
use std::time::Duration;

/// Ceiling applied to the handshake and to each capability call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Probes remote MCP servers through a [`Connector`].
#[derive(Debug, Clone)]
pub struct Prober<C = StreamableHttpConnector> {
    connector: C,
    timeout: Duration,
}

impl Prober {
    /// A prober using the streamable HTTP transport and [`DEFAULT_TIMEOUT`].
    pub fn streamable_http() -> Self {
        Self::new(StreamableHttpConnector)
    }
}

impl Default for Prober {
    fn default() -> Self {
        Self::streamable_http()
    }
}

impl<C: Connector> Prober<C> {
    pub fn new(connector: C) -> Self {
        Self {
            connector,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Validate a raw JSON request body and probe its URL.
    pub async fn probe(&self, body: &Value) -> Verdict {
        match ProbeRequest::from_json(body) {
            Ok(request) => self.probe_request(&request).await,
            Err(e) => {
                tracing::debug!("rejected probe request: {e}");
                e.into()
            }
        }
    }

    /// Probe an already validated request.
    pub async fn probe_request(&self, request: &ProbeRequest) -> Verdict {
        let url = request.url();
        tracing::info!(url, "probing MCP server");

        let session = match self.connect(url).await {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(url, "MCP handshake failed: {e}");
                return Verdict::failed(&e);
            }
        };

        let mut capabilities = Capabilities::new();
        for capability in Capability::ALL {
            let result = self.call(url, &session, capability).await;
            match &result {
                Ok(()) => tracing::debug!(url, %capability, "capability supported"),
                Err(e) => tracing::debug!(url, %capability, "capability failed: {e}"),
            }
            capabilities.insert(capability, ProbeOutcome::new(capability, result));
        }
        session.close().await;

        let verdict = Verdict::aggregate(capabilities);
        tracing::info!(url, ok = verdict.ok, "probe finished");
        verdict
    }

    async fn connect(&self, url: &str) -> Result<C::Session, Error> {
        match tokio::time::timeout(self.timeout, self.connector.connect(url)).await {
            Ok(result) => result,
            Err(_) => Err(Error::Timeout),
        }
    }

    async fn call(
        &self,
        url: &str,
        session: &C::Session,
        capability: Capability,
    ) -> Result<(), CallError> {
        match tokio::time::timeout(self.timeout, session.call(capability)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(url, %capability, "capability call timed out");
                Err(CallError::Timeout)
            }
        }
    }
}
