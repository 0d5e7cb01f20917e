//! Route lookup.
//!
//! # Responsibilities
//! - Store compiled routes in configuration order
//! - Look up the first route whose prefix matches a path
//! - Return matched route or explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) path prefix scan (acceptable for typical route counts)
//! - First match wins; no sorting by length or priority

use std::fmt;

use axum::http::header::HeaderValue;
use axum::http::uri::{Authority, PathAndQuery, Scheme};
use axum::http::Uri;

use crate::config::validation::{validate_routes, ValidationError};
use crate::config::{MatchMode, RouteConfig};
use crate::routing::matcher::PathPrefixMatcher;

/// Network address of one backend service.
#[derive(Debug, Clone)]
pub struct Backend {
    host: String,
    port: u16,
    authority: Authority,
    host_header: HeaderValue,
}

impl Backend {
    fn from_config(config: &RouteConfig) -> Result<Self, ValidationError> {
        let address = format!("{}:{}", config.host, config.port);
        let invalid = || ValidationError::InvalidBackend {
            prefix: config.prefix.clone(),
            address: address.clone(),
        };

        let authority: Authority = address.parse().map_err(|_| invalid())?;
        // Default port is left implicit, as user agents do.
        let host_header = if config.port == 80 {
            HeaderValue::from_str(&config.host)
        } else {
            HeaderValue::from_str(&address)
        }
        .map_err(|_| invalid())?;

        Ok(Self {
            host: config.host.clone(),
            port: config.port,
            authority,
            host_header,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Value sent as the `Host` header of outbound requests.
    pub fn host_header(&self) -> &HeaderValue {
        &self.host_header
    }

    /// Absolute URI of `path_and_query` on this backend.
    pub fn uri_for(&self, path_and_query: PathAndQuery) -> Result<Uri, axum::http::Error> {
        Uri::builder()
            .scheme(Scheme::HTTP)
            .authority(self.authority.clone())
            .path_and_query(path_and_query)
            .build()
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// A compiled route: prefix matcher plus backend address.
#[derive(Debug, Clone)]
pub struct Route {
    matcher: PathPrefixMatcher,
    backend: Backend,
}

impl Route {
    pub fn prefix(&self) -> &str {
        self.matcher.prefix()
    }

    pub fn backend(&self) -> &Backend {
        &self.backend
    }
}

/// Ordered, immutable set of routes.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Compile routes. Fails when any binding is invalid, including two
    /// routes sharing the same prefix.
    pub fn new(configs: &[RouteConfig], mode: MatchMode) -> Result<Self, Vec<ValidationError>> {
        validate_routes(configs)?;

        let routes = configs
            .iter()
            .map(|config| -> Result<Route, ValidationError> {
                Ok(Route {
                    matcher: PathPrefixMatcher::new(config.prefix.clone(), mode),
                    backend: Backend::from_config(config)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| vec![e])?;

        Ok(Self { routes })
    }

    /// First route whose prefix matches `path`, in configuration order.
    pub fn lookup(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.matcher.matches(path))
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Configured prefixes, in order.
    pub fn prefixes(&self) -> Vec<String> {
        self.routes.iter().map(|r| r.prefix().to_string()).collect()
    }
}
