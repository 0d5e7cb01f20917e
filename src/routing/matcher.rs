//! Route matching logic.
//!
//! # Responsibilities
//! - Match path prefix (case-sensitive)
//! - Optionally require the prefix to end on a segment boundary
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - Query string never takes part in matching
//! - No regex to guarantee O(n) matching

use crate::config::MatchMode;

/// Matches the request path against a route prefix.
#[derive(Debug, Clone)]
pub struct PathPrefixMatcher {
    prefix: String,
    mode: MatchMode,
}

impl PathPrefixMatcher {
    /// Create a new path prefix matcher.
    pub fn new(prefix: impl Into<String>, mode: MatchMode) -> Self {
        Self {
            prefix: prefix.into(),
            mode,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns true if `path` (without query) falls under this prefix.
    pub fn matches(&self, path: &str) -> bool {
        let Some(rest) = path.strip_prefix(self.prefix.as_str()) else {
            return false;
        };

        match self.mode {
            MatchMode::Literal => true,
            MatchMode::Segment => {
                rest.is_empty() || rest.starts_with('/') || self.prefix.ends_with('/')
            }
        }
    }
}
