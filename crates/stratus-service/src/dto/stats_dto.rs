//! Statistics DTO.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Aggregate counts, cached as a whole for a short TTL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatsResponse {
    /// All users.
    pub total_users: u64,
    /// Users created in the trailing seven days.
    pub recent_users: u64,
    /// When the snapshot was computed.
    pub timestamp: DateTime<Utc>,
    /// Value of the `cache:hits` counter at computation time.
    pub cache_hits: u64,
}
