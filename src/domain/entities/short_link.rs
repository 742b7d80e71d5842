//! Short link entity representing a stored URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL with its click counter.
///
/// Created once and never deleted; `created_at` is set at creation and
/// immutable, `clicks` only ever increments.
#[derive(Debug, Clone)]
pub struct ShortLink {
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub clicks: u64,
}

impl ShortLink {
    /// Creates a fresh link with zero clicks, stamped with the current time.
    pub fn new(code: String, long_url: String) -> Self {
        Self {
            code,
            long_url,
            created_at: Utc::now(),
            clicks: 0,
        }
    }
}
