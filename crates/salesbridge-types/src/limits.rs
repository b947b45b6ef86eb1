//! Row and candidate caps shared by the REST and tool-call surfaces.

use serde::{Deserialize, Serialize};

/// Configured upper bounds for backend queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    /// Maximum number of candidates a resolve call may return.
    pub resolve_limit: u32,
    /// Maximum number of rows a sales report may return.
    pub max_rows: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            resolve_limit: 10,
            max_rows: 5000,
        }
    }
}

impl Limits {
    /// Effective candidate limit for a resolve call.
    pub fn resolve(&self, requested: i64) -> u32 {
        effective_limit(requested, self.resolve_limit)
    }

    /// Effective `top` for a sales report.
    pub fn top(&self, requested: i64) -> u32 {
        effective_limit(requested, self.max_rows)
    }
}

/// Returns `requested` when `0 < requested <= max`, otherwise `max`.
pub fn effective_limit(requested: i64, max: u32) -> u32 {
    if requested > 0 && requested <= i64::from(max) {
        // Bounded by `max`, so the cast is lossless.
        requested as u32
    } else {
        max
    }
}
