//! API Gateway
//!
//! A single ingress point that routes requests to backend services by path
//! prefix, built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                          ┌──────────────────────────────────────────────┐
//!                          │                 API GATEWAY                   │
//!                          │                                               │
//!     Client Request       │  ┌─────────┐    ┌────────────┐    ┌────────┐ │
//!     ─────────────────────┼─▶│  http   │───▶│  routing   │───▶│rewrite │ │
//!                          │  │dispatch │    │route table │    │ path   │ │
//!                          │  └────┬────┘    └────────────┘    └───┬────┘ │
//!                          │       │ no match                      │      │
//!                          │       ▼                               ▼      │
//!                          │  ┌─────────┐                    ┌─────────┐  │
//!                          │  │  local  │                    │  proxy  │──┼──▶ Backend
//!     Client Response      │  │ health  │                    │forwarder│◀─┼─── (streamed)
//!     ◀────────────────────┼──│  info   │◀───────────────────│         │  │
//!                          │  └─────────┘                    └─────────┘  │
//!                          └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use api_gateway::lifecycle::{signals, startup};
use api_gateway::observability::{logging, metrics};
use api_gateway::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "api-gateway")]
#[command(about = "Path-prefix API gateway and streaming reverse proxy", long_about = None, version)]
struct Cli {
    /// TOML configuration file. Without one the built-in todo/user routes are used.
    #[arg(short, long, env = "GATEWAY_CONFIG")]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = startup::resolve_config(cli.config.as_deref(), cli.bind)?;

    logging::init_logging(&config.observability);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "api-gateway starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        routes = config.routes.len(),
        match_mode = ?config.routing.match_mode,
        connect_timeout_ms = config.timeouts.connect_ms,
        response_header_timeout_ms = config.timeouts.response_header_ms,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // Address already validated.
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        }
    }

    let bind_address = config.listener.bind_address.clone();
    let server = HttpServer::new(config)?;

    let listener = TcpListener::bind(&bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_listener(shutdown);

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
