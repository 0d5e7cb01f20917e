//! Gateway dispatcher.
//!
//! # Request States
//! ```text
//! RECEIVED → ROUTED ──no match──→ LOCAL_HANDLED
//!               │
//!               ▼
//!           REWRITTEN → PROXIED ──ok──→ COMPLETED
//!                          │
//!                          └──error before head──→ FAILED_UPSTREAM (503)
//! ```
//!
//! The dispatcher keeps nothing between requests; all it shares is the
//! immutable route table and the forwarder's client handle.

use std::time::Instant;

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::response::Response;

use crate::http::request::RequestId;
use crate::http::server::AppState;
use crate::http::{local, response};
use crate::observability::metrics;
use crate::proxy::UpstreamError;
use crate::routing::rewrite::outbound_path_and_query;

/// Top-level handler for every inbound request.
pub async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let request_id = RequestId::from_headers(request.headers());
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let Some(route) = state.routes.lookup(&path) else {
        tracing::debug!(request_id = %request_id, method = %method, path = %path, "No route matched, handling locally");
        let response = local::handle(&state.routes, &method, &path);
        metrics::record_request(method.as_str(), response.status().as_u16(), "local", start_time);
        return response;
    };

    let prefix = route.prefix();
    let backend = route.backend();

    let result = match outbound_path_and_query(request.uri(), prefix) {
        Ok(outbound_path) => {
            tracing::debug!(
                request_id = %request_id,
                method = %method,
                path = %path,
                route = %prefix,
                backend = %backend,
                outbound_path = %outbound_path,
                "Proxying request"
            );
            state.forwarder.forward(backend, outbound_path, request).await
        }
        Err(e) => Err(UpstreamError::InvalidTarget {
            backend: backend.to_string(),
            source: e.into(),
        }),
    };

    match result {
        Ok(response) => {
            metrics::record_request(method.as_str(), response.status().as_u16(), prefix, start_time);
            response
        }
        Err(err) => {
            tracing::error!(
                request_id = %request_id,
                method = %method,
                path = %path,
                route = %prefix,
                backend = %backend,
                error = %err.report(),
                "Upstream request failed"
            );
            metrics::record_upstream_failure(prefix, err.kind());
            let response = response::service_unavailable();
            metrics::record_request(method.as_str(), response.status().as_u16(), prefix, start_time);
            response
        }
    }
}
