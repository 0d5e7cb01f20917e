//! Outbound HTTP forwarding.
//!
//! # Responsibilities
//! - Rebuild the inbound request against the backend (URI, `Host`)
//! - Stream the request body upstream without buffering
//! - Stream the backend response back verbatim
//! - Bound connect and response-head waits
//!
//! # Design Decisions
//! - One attempt per request, no retries
//! - Connections are not reused unless `pool.max_idle_per_host > 0`
//! - Dropping the returned future (caller went away) drops the outbound
//!   request, which closes the backend connection
//! - Body errors after the response head was returned cannot change the
//!   status any more; they are logged and the caller stream is cut
//! - Relayed headers pass through hyper's server, which adds a `Date`
//!   header when the backend sent none

use std::time::Duration;

use axum::body::Body;
use axum::http::header::HOST;
use axum::http::uri::PathAndQuery;
use axum::http::{Request, Response, Version};
use http_body_util::BodyExt;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;

use crate::config::{PoolConfig, TimeoutConfig};
use crate::proxy::error::UpstreamError;
use crate::resilience::UpstreamTimeouts;
use crate::routing::Backend;

/// HTTP client type for forwarding requests.
pub type HttpClient = Client<HttpConnector, Body>;

/// Performs one upstream call per inbound request.
#[derive(Clone, Debug)]
pub struct Forwarder {
    client: HttpClient,
    timeouts: UpstreamTimeouts,
}

impl Forwarder {
    pub fn new(timeouts: &TimeoutConfig, pool: &PoolConfig) -> Self {
        let timeouts = UpstreamTimeouts::from(timeouts);

        let mut connector = HttpConnector::new();
        connector.set_connect_timeout(Some(timeouts.connect));
        connector.set_nodelay(true);

        let client = Client::builder(TokioExecutor::new())
            .pool_max_idle_per_host(pool.max_idle_per_host)
            .pool_idle_timeout(Duration::from_secs(pool.idle_timeout_secs))
            .build(connector);

        Self { client, timeouts }
    }

    pub fn timeouts(&self) -> UpstreamTimeouts {
        self.timeouts
    }

    /// Send `request` to `backend` at `path_and_query` and return the
    /// backend's response with its body still streaming.
    ///
    /// Method, headers and body are forwarded as received, except `Host`,
    /// which is overwritten with the backend address.
    pub async fn forward(
        &self,
        backend: &Backend,
        path_and_query: PathAndQuery,
        request: Request<Body>,
    ) -> Result<Response<Body>, UpstreamError> {
        let (mut parts, body) = request.into_parts();

        parts.uri = backend
            .uri_for(path_and_query)
            .map_err(|source| UpstreamError::InvalidTarget {
                backend: backend.to_string(),
                source,
            })?;
        parts.version = Version::HTTP_11;
        parts.headers.insert(HOST, backend.host_header().clone());

        let outbound = Request::from_parts(parts, body);

        let response = match self
            .timeouts
            .within_response_header(self.client.request(outbound))
            .await
        {
            Ok(Ok(response)) => response,
            Ok(Err(source)) if source.is_connect() => {
                return Err(UpstreamError::Connect {
                    backend: backend.to_string(),
                    source,
                })
            }
            Ok(Err(source)) => {
                return Err(UpstreamError::Exchange {
                    backend: backend.to_string(),
                    source,
                })
            }
            Err(_) => {
                return Err(UpstreamError::ResponseTimeout {
                    backend: backend.to_string(),
                    timeout: self.timeouts.response_header,
                })
            }
        };

        let (parts, body) = response.into_parts();
        let backend_addr = backend.to_string();
        let body = body.map_err(move |e| {
            tracing::warn!(
                backend = %backend_addr,
                error = %e,
                "Upstream body failed after response head was sent, closing client stream"
            );
            e
        });

        Ok(Response::from_parts(parts, Body::new(body)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MatchMode, RouteConfig};
    use crate::routing::RouteTable;

    fn backend_at(port: u16) -> Backend {
        let table = RouteTable::new(
            &[RouteConfig::new("/svc", "127.0.0.1", port)],
            MatchMode::Literal,
        )
        .unwrap();
        table.routes()[0].backend().clone()
    }

    #[test]
    fn test_forwarder_uses_configured_timeouts() {
        let forwarder = Forwarder::new(
            &TimeoutConfig {
                connect_ms: 100,
                response_header_ms: 200,
            },
            &PoolConfig::default(),
        );
        assert_eq!(forwarder.timeouts().connect, Duration::from_millis(100));
        assert_eq!(forwarder.timeouts().response_header, Duration::from_millis(200));
    }

    #[tokio::test]
    async fn test_refused_connection_is_connect_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let forwarder = Forwarder::new(&TimeoutConfig::default(), &PoolConfig::default());
        let request = Request::builder()
            .uri("/svc/items")
            .body(Body::empty())
            .unwrap();

        let err = forwarder
            .forward(&backend_at(port), PathAndQuery::from_static("/items"), request)
            .await
            .unwrap_err();

        assert!(matches!(err, UpstreamError::Connect { .. }), "got {err:?}");
        assert_eq!(err.kind(), "connect");
        assert!(err.report().contains(&format!("127.0.0.1:{port}")));
    }
}
