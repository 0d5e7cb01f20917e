//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Compile the route table and upstream client
//! - Create the Axum Router with the dispatcher as its only handler
//! - Wire up middleware (tracing)
//! - Serve on a listener until shutdown is signalled

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::{ConfigError, GatewayConfig};
use crate::http::dispatch::dispatch;
use crate::proxy::Forwarder;
use crate::routing::RouteTable;

/// Application state injected into handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
    pub forwarder: Forwarder,
}

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
    routes: Arc<RouteTable>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// Fails when the route set is invalid (e.g. duplicate prefixes).
    pub fn new(config: GatewayConfig) -> Result<Self, ConfigError> {
        let routes = RouteTable::new(&config.routes, config.routing.match_mode)
            .map_err(ConfigError::Validation)?;
        let routes = Arc::new(routes);

        let state = AppState {
            routes: routes.clone(),
            forwarder: Forwarder::new(&config.timeouts, &config.pool),
        };

        let router = Self::build_router(state);
        Ok(Self { router, routes })
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Every path goes to the dispatcher so the route table is consulted
    /// before any local endpoint.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .fallback(dispatch)
            .with_state(state)
            .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
    }

    /// The request handler, for serving or driving directly in tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires. In-flight requests are drained before returning.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        for route in self.routes.routes() {
            tracing::info!(prefix = %route.prefix(), backend = %route.backend(), "Route configured");
        }

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
