//! Server configuration from command-line flags and environment.

use clap::Parser;
use std::{net::SocketAddr, time::Duration};

/// Management backend for registered MCP servers.
#[derive(Parser, Debug, Clone)]
#[command(name = "wmcp-console", version, about)]
pub struct Config {
    /// Address the HTTP server listens on.
    #[arg(long, env = "WMCP_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Seconds allowed for the handshake and for each capability call
    /// when testing a connection.
    #[arg(
        long,
        env = "WMCP_PROBE_TIMEOUT",
        value_name = "SECS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub probe_timeout: u64,
}

impl Config {
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout)
    }
}
