//! Upstream failure types.

use std::error::Error as _;
use std::time::Duration;

use thiserror::Error;

/// Why an upstream call failed before a response could be relayed.
///
/// Every variant is caller-visible only as a generic 503; the detail is
/// for the operational log.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// TCP connect failed or timed out.
    #[error("failed to connect to {backend}: {source}")]
    Connect {
        backend: String,
        #[source]
        source: hyper_util::client::legacy::Error,
    },

    /// Connection established but the exchange failed (reset, malformed
    /// response head, request body error).
    #[error("request to {backend} failed: {source}")]
    Exchange {
        backend: String,
        #[source]
        source: hyper_util::client::legacy::Error,
    },

    #[error("{backend} sent no response head within {timeout:?}")]
    ResponseTimeout { backend: String, timeout: Duration },

    #[error("cannot build upstream request for {backend}: {source}")]
    InvalidTarget {
        backend: String,
        #[source]
        source: axum::http::Error,
    },
}

impl UpstreamError {
    /// Short label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamError::Connect { .. } => "connect",
            UpstreamError::Exchange { .. } => "exchange",
            UpstreamError::ResponseTimeout { .. } => "timeout",
            UpstreamError::InvalidTarget { .. } => "invalid_target",
        }
    }

    /// The full cause chain, for logging.
    pub fn report(&self) -> String {
        let mut report = self.to_string();
        let mut source = self.source().and_then(|s| s.source());
        while let Some(cause) = source {
            report.push_str(": ");
            report.push_str(&cause.to_string());
            source = cause.source();
        }
        report
    }
}
