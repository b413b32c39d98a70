//! Herald greeter binary entry point.
//!
//! A thin wrapper around the herald-server library that parses
//! configuration, initializes logging, and runs the service.

use anyhow::Result;
use herald_server::{Server, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Herald greeter starting...");

    let config = ServerConfig::from_args();

    tracing::info!(
        "configuration loaded: bind={}, listing={}, servers={:?}",
        config.http_bind,
        config.listing_url,
        config.servers
    );

    config.validate()?;

    let server = Server::new(config)?;
    server.run().await?;

    Ok(())
}
