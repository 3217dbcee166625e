//! Common test data and constants

use aggregator::database::format_sql_timestamp;
use chrono::{Duration, Utc};

/// Common system identifiers
pub mod systems {
    pub const BILLING: &str = "sys-billing";
    pub const MARKETPLACE: &str = "sys-marketplace";
    pub const SUBSCRIPTIONS: &str = "sys-subscriptions";
}

/// Base URL nothing listens on, for transport failures
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1";

/// Stored timestamp `days` days before now
pub fn days_ago(days: i64) -> String {
    format_sql_timestamp(Utc::now() - Duration::days(days))
}

/// Snapshot table as provisioned outside this service: decimal money
/// columns and a database-filled `TIMESTAMP`.
pub const PROVISIONED_SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE systems (
        id VARCHAR(64) PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        url VARCHAR(255) NOT NULL,
        revenue_endpoint VARCHAR(255) NOT NULL,
        status VARCHAR(20) DEFAULT 'active'
    )
    "#,
    r#"
    CREATE TABLE revenue_snapshots (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        system_id VARCHAR(64) NOT NULL,
        current_revenue DECIMAL(15, 2),
        mrr DECIMAL(15, 2),
        arr DECIMAL(15, 2),
        growth_rate DECIMAL(5, 2),
        active_customers INTEGER,
        snapshot_timestamp TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
    "#,
];
