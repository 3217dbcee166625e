//! Database record types (entities).

use anyhow::{anyhow, Result};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A revenue-reporting system polled by the aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemRecord {
    pub id: String,
    pub name: String,
    pub url: String,
    pub revenue_endpoint: String,
    pub status: String,
}

impl SystemRecord {
    pub fn revenue_url(&self) -> String {
        format!("{}{}", self.url, self.revenue_endpoint)
    }
}

/// One successful fetch, as written to `revenue_snapshots`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueSnapshot {
    pub system_id: String,
    pub current_revenue: f64,
    pub mrr: Option<f64>,
    pub arr: Option<f64>,
    pub growth_rate: Option<f64>,
    pub active_customers: Option<i64>,
}

/// A persisted snapshot together with its write time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotRecord {
    #[serde(flatten)]
    pub snapshot: RevenueSnapshot,
    pub snapshot_timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRevenue {
    pub date: NaiveDate,
    pub total_revenue: f64,
}

/// Timestamp literal in the shape both Postgres and SQLite render a
/// `TIMESTAMP` column as text, so the two compare lexically.
pub fn format_sql_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Parse a timestamp column read back as text.
///
/// Postgres renders `2024-05-01 08:00:00.123456` (with `+00` for
/// `timestamptz`), SQLite's `CURRENT_TIMESTAMP` gives `2024-05-01 08:00:00`.
/// Values without an offset are UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%#z") {
        return Some(timestamp.with_timezone(&Utc));
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(timestamp.and_utc());
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|timestamp| timestamp.with_timezone(&Utc))
}

/// Start of a trailing window of `days` days, or `None` when `days` is not
/// positive or the window reaches past the representable range.
pub fn history_cutoff(days: i64, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    if days < 1 {
        return None;
    }
    now.checked_sub_signed(Duration::try_days(days)?)
}

impl DailyRevenue {
    /// Build from a grouped history row (`day` as `YYYY-MM-DD`).
    pub fn from_row(day: &str, total_revenue: f64) -> Result<Self> {
        let date = NaiveDate::parse_from_str(day.trim(), "%Y-%m-%d")
            .map_err(|e| anyhow!("Invalid history day '{}': {}", day, e))?;
        Ok(Self {
            date,
            total_revenue,
        })
    }
}
