//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, tracing layer)
//!     → dispatch.rs (route lookup, rewrite, forward)
//!         → local.rs when no route matches
//!     → response.rs (gateway-originated error bodies)
//!     → Send to client
//! ```

pub mod dispatch;
pub mod local;
pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestId, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
