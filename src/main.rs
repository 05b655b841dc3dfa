//! dexgraph GraphQL gateway

use clap::Parser;
use dexgraph::{Server, ServerConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> dexgraph::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ServerConfig::parse();
    info!("Starting dexgraph on {}...", config.socket_addr());

    let server = Server::bind(&config).await?;
    server.serve().await
}
