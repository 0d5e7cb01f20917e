//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path)
//!     → router.rs (route lookup, first match in config order)
//!     → matcher.rs (evaluate prefix condition)
//!     → rewrite.rs (strip the matched prefix)
//!     → Return: matched Route + outbound path, or NoMatch
//!
//! Route Compilation (at startup):
//!     RouteConfig[]
//!     → Validate (rooted, distinct prefixes)
//!     → Compile matchers and backend authorities
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex in hot path (prefix matching only)
//! - Deterministic: same input always matches same route

pub mod matcher;
pub mod rewrite;
pub mod router;

pub use router::{Backend, Route, RouteTable};
