//! Timeout enforcement.
//!
//! # Responsibilities
//! - Bound connection establishment to a backend
//! - Bound the wait for the backend's response head
//! - Cancel operations cleanly on timeout
//!
//! # Design Decisions
//! - Uses Tokio's timeout facilities
//! - Body streaming is not bounded; large or slow bodies are legitimate
//! - Timed-out requests fail before any response byte is sent, so they map
//!   to 503 like any other unreachable-backend failure

use std::future::Future;
use std::time::Duration;

use tokio::time::{self, error::Elapsed};

use crate::config::TimeoutConfig;

/// Deadlines applied to each upstream call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpstreamTimeouts {
    pub connect: Duration,
    pub response_header: Duration,
}

impl From<&TimeoutConfig> for UpstreamTimeouts {
    fn from(config: &TimeoutConfig) -> Self {
        Self {
            connect: Duration::from_millis(config.connect_ms),
            response_header: Duration::from_millis(config.response_header_ms),
        }
    }
}

impl UpstreamTimeouts {
    /// Run `fut` until the response head deadline. Dropping the future on
    /// expiry aborts the outbound call.
    pub async fn within_response_header<F: Future>(&self, fut: F) -> Result<F::Output, Elapsed> {
        time::timeout(self.response_header, fut).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_from_config_millis() {
        let timeouts = UpstreamTimeouts::from(&TimeoutConfig {
            connect_ms: 250,
            response_header_ms: 1_500,
        });
        assert_eq!(timeouts.connect, Duration::from_millis(250));
        assert_eq!(timeouts.response_header, Duration::from_millis(1_500));
    }

    #[tokio::test]
    async fn response_header_deadline_expires() {
        let timeouts = UpstreamTimeouts {
            connect: Duration::from_millis(10),
            response_header: Duration::from_millis(20),
        };
        let result = timeouts
            .within_response_header(tokio::time::sleep(Duration::from_secs(5)))
            .await;
        assert!(result.is_err());

        let result = timeouts.within_response_header(async { 7 }).await;
        assert_eq!(result.unwrap(), 7);
    }
}
