//! Command-line interface for probing MCP servers.

use crate::{probe::Prober, request::ProbeRequest, verdict::Verdict};
use clap::Parser;
use std::time::Duration;

/// Probe an MCP server for handshake and standard capability support.
#[derive(Parser, Debug)]
#[command(name = "rmcp-probe", version, about)]
pub struct App {
    /// URL of the remote MCP server (http or https).
    pub url: String,

    /// Timeout in seconds for the handshake and for each capability call.
    #[arg(
        long,
        value_name = "SECS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,
}

impl App {
    /// Parse CLI arguments, probe the target and print the verdict.
    ///
    /// Returns the verdict so the caller can pick an exit status.
    pub async fn run() -> Result<Verdict, serde_json::Error> {
        let app = App::parse();
        let prober = Prober::streamable_http().with_timeout(Duration::from_secs(app.timeout));

        let verdict = match ProbeRequest::new(app.url) {
            Ok(request) => prober.probe_request(&request).await,
            Err(e) => Verdict::failed(&e),
        };

        println!("{}", serde_json::to_string_pretty(&verdict)?);
        Ok(verdict)
    }
}
