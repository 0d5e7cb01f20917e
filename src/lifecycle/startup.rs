//! Startup orchestration.
//!
//! # Responsibilities
//! - Resolve the effective configuration (file or defaults, CLI overrides)
//! - Fail fast: any configuration error aborts startup
//!
//! Ordering in `main`: config → logging → metrics → server → listener.

use std::path::Path;

use crate::config::validation::validate_config;
use crate::config::{load_config, ConfigError, GatewayConfig};

/// Load `path` if given, otherwise the built-in todo/user deployment, then
/// apply a bind address override and validate the result.
pub fn resolve_config(
    path: Option<&Path>,
    bind_override: Option<String>,
) -> Result<GatewayConfig, ConfigError> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => GatewayConfig::with_default_routes(),
    };

    if let Some(bind) = bind_override {
        config.listener.bind_address = bind;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
