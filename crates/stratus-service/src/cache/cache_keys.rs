//! Cache keys shared with other deployments of the service.
//!
//! The names are part of the external contract: other processes reading the
//! same Redis expect exactly these keys.

/// JSON array of every user.
pub const USERS_ALL: &str = "users:all";

/// JSON object with the aggregate statistics.
pub const STATS: &str = "stats";

/// Integer hit counter, read by the stats endpoint. Never written here.
pub const CACHE_HITS: &str = "cache:hits";
