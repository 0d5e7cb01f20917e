//! Path rewriting for proxied requests.
//!
//! The matched prefix is removed from the start of the path; the query
//! string is carried over untouched.

use axum::http::uri::{InvalidUri, PathAndQuery};
use axum::http::Uri;

/// Strip `prefix` from `path`. An empty result becomes `/`, and a result
/// that no longer starts with `/` (literal match inside a segment) gets one
/// prepended so the backend always receives an origin-form path.
pub fn rewrite_path(path: &str, prefix: &str) -> String {
    let stripped = path.strip_prefix(prefix).unwrap_or(path);
    if stripped.is_empty() {
        "/".to_string()
    } else if stripped.starts_with('/') {
        stripped.to_string()
    } else {
        format!("/{stripped}")
    }
}

/// Path and query to send upstream for `uri` matched under `prefix`.
pub fn outbound_path_and_query(uri: &Uri, prefix: &str) -> Result<PathAndQuery, InvalidUri> {
    let path = rewrite_path(uri.path(), prefix);
    match uri.query() {
        Some(query) => format!("{path}?{query}").parse(),
        None => path.parse(),
    }
}
