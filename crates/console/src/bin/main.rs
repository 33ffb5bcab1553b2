//! Binary entry point for the wmcp-console server.

use clap::Parser;
use wmcp_console::Config;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wmcp_console=info,rmcp_probe=info,tower_http=info".into()),
        )
        .init();
    let config = Config::parse();
    if let Err(e) = wmcp_console::serve(config).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
