//! Application-wide constants for timeouts, pool sizes and defaults
//!
//! Values that are not exposed through environment configuration live here
//! so there is a single place to look them up.

use std::time::Duration;

/// Outbound HTTP constants
pub mod http {
    use super::Duration;

    /// Total timeout for one revenue fetch (connect + headers + body)
    pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);
}

/// Database pool constants
pub mod database {
    /// Connections kept open even when idle
    pub const MIN_CONNECTIONS: u32 = 5;

    /// Hard upper bound on concurrently checked-out connections
    pub const MAX_CONNECTIONS: u32 = 20;
}

/// Revenue history constants
pub mod history {
    /// Trailing window used when `days` is not supplied
    pub const DEFAULT_DAYS: i64 = 30;
}

/// Service identity reported by `/health`
pub mod service {
    pub const NAME: &str = "revenue-aggregator";

    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}
