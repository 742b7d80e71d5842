//! DTOs for link statistics.

use crate::domain::entities::ShortLink;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Statistics for a single short link.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub clicks: u64,
}

impl From<ShortLink> for StatsResponse {
    fn from(link: ShortLink) -> Self {
        Self {
            url: link.long_url,
            created_at: link.created_at,
            clicks: link.clicks,
        }
    }
}
