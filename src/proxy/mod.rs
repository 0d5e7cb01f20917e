//! Proxy forwarding subsystem.
//!
//! # Data Flow
//! ```text
//! Routed request + rewritten path
//!     → forwarder.rs (rebuild URI, replace Host, open connection)
//!     → backend
//!     → forwarder.rs (stream status, headers, body back)
//!
//! On failure before the response head:
//!     → error.rs (UpstreamError) → dispatcher answers 503
//! ```

pub mod error;
pub mod forwarder;

pub use error::UpstreamError;
pub use forwarder::{Forwarder, HttpClient};
