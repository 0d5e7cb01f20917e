//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Request to backend:
//!     → timeouts.rs (enforce connect / response-head deadlines)
//!     → On failure: caller receives 503, detail goes to the log
//! ```
//!
//! # Design Decisions
//! - Timeouts are non-negotiable; every external call has a deadline
//! - Exactly one attempt per request: no retries, no circuit breaking

pub mod timeouts;

pub use timeouts::UpstreamTimeouts;
