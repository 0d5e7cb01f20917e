//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check route prefixes are rooted and distinct
//! - Check backend addresses form a valid authority
//! - Validate value ranges (timeouts > 0, ports non-zero)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use axum::http::uri::Authority;
use thiserror::Error;

use crate::config::schema::{GatewayConfig, RouteConfig};

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("route #{index}: prefix must not be empty")]
    EmptyPrefix { index: usize },

    #[error("route #{index}: prefix '{prefix}' must begin with '/'")]
    UnrootedPrefix { index: usize, prefix: String },

    #[error("route #{index}: prefix '{prefix}' must not contain a query or fragment")]
    PrefixWithQuery { index: usize, prefix: String },

    #[error("route #{index}: prefix '{prefix}' is already bound by route #{first}")]
    DuplicatePrefix {
        index: usize,
        first: usize,
        prefix: String,
    },

    #[error("route '{prefix}': backend host must not be empty")]
    EmptyHost { prefix: String },

    #[error("route '{prefix}': backend port must be non-zero")]
    ZeroPort { prefix: String },

    #[error("route '{prefix}': '{address}' is not a valid backend address")]
    InvalidBackend { prefix: String, address: String },

    #[error("{field}: '{value}' is not a socket address")]
    InvalidSocketAddr { field: &'static str, value: String },

    #[error("timeouts.{0} must be greater than zero")]
    ZeroTimeout(&'static str),
}

/// Validate the whole configuration, collecting every error.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = match validate_routes(&config.routes) {
        Ok(()) => Vec::new(),
        Err(errors) => errors,
    };

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidSocketAddr {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidSocketAddr {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if config.timeouts.connect_ms == 0 {
        errors.push(ValidationError::ZeroTimeout("connect_ms"));
    }
    if config.timeouts.response_header_ms == 0 {
        errors.push(ValidationError::ZeroTimeout("response_header_ms"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate route bindings on their own. Used by the route table, which
/// refuses to build from an invalid set.
pub fn validate_routes(routes: &[RouteConfig]) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (index, route) in routes.iter().enumerate() {
        if route.prefix.is_empty() {
            errors.push(ValidationError::EmptyPrefix { index });
        } else if !route.prefix.starts_with('/') {
            errors.push(ValidationError::UnrootedPrefix {
                index,
                prefix: route.prefix.clone(),
            });
        } else if route.prefix.contains(['?', '#']) {
            errors.push(ValidationError::PrefixWithQuery {
                index,
                prefix: route.prefix.clone(),
            });
        }

        if let Some(first) = routes[..index].iter().position(|r| r.prefix == route.prefix) {
            errors.push(ValidationError::DuplicatePrefix {
                index,
                first,
                prefix: route.prefix.clone(),
            });
        }

        if route.host.is_empty() {
            errors.push(ValidationError::EmptyHost {
                prefix: route.prefix.clone(),
            });
        } else if route.port == 0 {
            errors.push(ValidationError::ZeroPort {
                prefix: route.prefix.clone(),
            });
        } else {
            let address = format!("{}:{}", route.host, route.port);
            if address.parse::<Authority>().is_err() {
                errors.push(ValidationError::InvalidBackend {
                    prefix: route.prefix.clone(),
                    address,
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
