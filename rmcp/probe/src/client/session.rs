//! [`Session`] for a running rmcp client service.

use super::Session;
use crate::capability::{CallError, Capability};
use rmcp::{RoleClient, service::RunningService};

impl Session for RunningService<RoleClient, ()> {
    /// Sends exactly one request; later pages are never fetched.
    async fn call(&self, capability: Capability) -> Result<(), CallError> {
        let peer = self.peer();
        match capability {
            Capability::ListPrompts => {
                peer.list_prompts(None).await?;
            }
            Capability::ListResources => {
                peer.list_resources(None).await?;
            }
            Capability::ListTools => {
                peer.list_tools(None).await?;
            }
        }
        Ok(())
    }

    async fn close(self) {
        if let Err(e) = self.cancel().await {
            tracing::debug!("client service did not shut down cleanly: {e}");
        }
    }
}
