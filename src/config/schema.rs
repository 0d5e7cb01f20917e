//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the API gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Route definitions, checked in order (first match wins).
    pub routes: Vec<RouteConfig>,

    /// Prefix matching behavior.
    pub routing: RoutingConfig,

    /// Upstream timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Upstream connection reuse.
    pub pool: PoolConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// A static binding from a path prefix to one backend address.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RouteConfig {
    /// Path prefix to match (e.g., "/todos").
    pub prefix: String,

    /// Backend host name or IP.
    pub host: String,

    /// Backend port.
    pub port: u16,
}

impl RouteConfig {
    pub fn new(prefix: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        Self {
            prefix: prefix.into(),
            host: host.into(),
            port,
        }
    }
}

/// How a route prefix is compared against the request path.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Raw string prefix: `/todo` also matches `/todos-extra`.
    #[default]
    Literal,
    /// The prefix must end on a path segment boundary.
    Segment,
}

/// Routing behavior.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RoutingConfig {
    pub match_mode: MatchMode,
}

/// Timeouts applied to every upstream call.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// TCP connect timeout in milliseconds.
    pub connect_ms: u64,

    /// Time allowed between sending the request and receiving the
    /// response head, in milliseconds. Body streaming is not bounded.
    pub response_header_ms: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_ms: 5_000,
            response_header_ms: 30_000,
        }
    }
}

/// Upstream connection pool settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Idle connections kept per backend. Zero opens a fresh connection
    /// for every request.
    pub max_idle_per_host: usize,

    /// How long an idle connection is kept, in seconds.
    pub idle_timeout_secs: u64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: 0,
            idle_timeout_secs: 30,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// The in-cluster deployment: todo and user services.
pub(crate) fn default_routes() -> Vec<RouteConfig> {
    vec![
        RouteConfig::new("/todos", "todo-service.todo-app.svc.cluster.local", 3001),
        RouteConfig::new("/users", "user-service.todo-app.svc.cluster.local", 3002),
    ]
}

impl GatewayConfig {
    /// Defaults plus the standard todo/user routes.
    pub fn with_default_routes() -> Self {
        Self {
            routes: default_routes(),
            ..Self::default()
        }
    }
}
