//! Request identification.
//!
//! # Responsibilities
//! - Reuse the caller's `x-request-id` when present
//! - Otherwise generate a UUID v4
//!
//! # Design Decisions
//! - The ID is for log correlation only; it is never added to the
//!   forwarded request or the relayed response

use std::fmt;

use axum::http::HeaderMap;
use uuid::Uuid;

/// Header carrying a caller-supplied request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Correlation ID attached to every log line of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(String);

impl RequestId {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get(X_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(|v| Self(v.to_string()))
            .unwrap_or_else(|| Self(Uuid::new_v4().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
