//! MNS Bridge Service - wallet callback endpoints over HTTP
//!
//! Hosts the MNS resolution adapter behind a small HTTP surface so wallet
//! runtimes integrating over HTTP can issue the name-lookup and
//! transaction-review callbacks.

mod config;
mod error;
mod server;
mod types;

use crate::config::Config;
use crate::error::{BridgeError, Result};
use crate::server::{start_server, ServerState, SharedState};
use mns_client::MnsClient;
use mns_snap::ResolutionAdapter;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let env_filter = EnvFilter::from_default_env().add_directive("mns_bridge=info".parse()?);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_stackdriver::layer())
        .init();

    info!("Starting MNS Bridge Service...");

    // Load configuration from environment
    let config = Config::from_env();
    info!("Port: {}", config.port);
    info!("MNS API: {}", config.mns_api_url);

    // The adapter shares one immutable client for the life of the process
    let adapter = ResolutionAdapter::new(MnsClient::with_base_url(&config.mns_api_url));
    let state: SharedState = Arc::new(ServerState::new(adapter));

    // Start HTTP server (blocking)
    start_server(state, config.port)
        .await
        .map_err(|e| BridgeError::Config(format!("Server error: {}", e)))?;

    Ok(())
}
