//! Revenue snapshot writes and history rollups.
//!
//! Numeric and timestamp columns are cast on read so the same queries work
//! whether the columns are `DOUBLE PRECISION` or `DECIMAL`, and `TIMESTAMP`
//! or text.

use anyhow::{anyhow, Result};
use chrono::Utc;
use sqlx::Row;
use tracing::{debug, error};

use super::records::{
    format_sql_timestamp, history_cutoff, parse_timestamp, DailyRevenue, RevenueSnapshot,
    SnapshotRecord,
};
use super::Database;

impl Database {
    /// Append one snapshot; the database stamps `snapshot_timestamp`.
    pub async fn save_snapshot(&self, snapshot: &RevenueSnapshot) -> Result<()> {
        debug!("Storing revenue snapshot for: {}", snapshot.system_id);

        let mut conn = self.pool.acquire().await?;

        match sqlx::query(
            r#"
            INSERT INTO revenue_snapshots (
                system_id, current_revenue, mrr, arr,
                growth_rate, active_customers
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&snapshot.system_id)
        .bind(snapshot.current_revenue)
        .bind(snapshot.mrr)
        .bind(snapshot.arr)
        .bind(snapshot.growth_rate)
        .bind(snapshot.active_customers)
        .execute(&mut *conn)
        .await
        {
            Ok(_) => Ok(()),
            Err(e) => {
                error!(
                    "Failed to store revenue snapshot for {}: {}",
                    snapshot.system_id, e
                );
                Err(e.into())
            }
        }
    }

    /// Summed revenue per calendar day over the trailing `days`,
    /// most recent day first.
    pub async fn get_revenue_history(&self, days: i64) -> Result<Vec<DailyRevenue>> {
        let cutoff = history_cutoff(days, Utc::now())
            .ok_or_else(|| anyhow!("History window of {} days is out of range", days))?;
        debug!("Querying revenue history since {}", cutoff);

        let mut conn = self.pool.acquire().await?;

        let rows = sqlx::query(
            r#"
            SELECT CAST(DATE(snapshot_timestamp) AS TEXT) AS day,
                   CAST(SUM(current_revenue) AS DOUBLE PRECISION) AS total_revenue
            FROM revenue_snapshots
            WHERE CAST(snapshot_timestamp AS TEXT) >= $1
            GROUP BY DATE(snapshot_timestamp)
            ORDER BY day DESC
            "#,
        )
        .bind(format_sql_timestamp(cutoff))
        .fetch_all(&mut *conn)
        .await?;

        let mut history = Vec::with_capacity(rows.len());
        for row in rows {
            let day: String = row.try_get("day")?;
            let total_revenue: Option<f64> = row.try_get("total_revenue")?;
            history.push(DailyRevenue::from_row(&day, total_revenue.unwrap_or(0.0))?);
        }

        Ok(history)
    }

    pub async fn get_snapshots_for_system(&self, system_id: &str) -> Result<Vec<SnapshotRecord>> {
        let mut conn = self.pool.acquire().await?;

        let rows = sqlx::query(
            r#"
            SELECT CAST(system_id AS TEXT) AS system_id,
                   CAST(current_revenue AS DOUBLE PRECISION) AS current_revenue,
                   CAST(mrr AS DOUBLE PRECISION) AS mrr,
                   CAST(arr AS DOUBLE PRECISION) AS arr,
                   CAST(growth_rate AS DOUBLE PRECISION) AS growth_rate,
                   CAST(active_customers AS BIGINT) AS active_customers,
                   CAST(snapshot_timestamp AS TEXT) AS snapshot_timestamp
            FROM revenue_snapshots
            WHERE system_id = $1
            ORDER BY snapshot_timestamp DESC
            "#,
        )
        .bind(system_id)
        .fetch_all(&mut *conn)
        .await?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            let raw: String = row.try_get("snapshot_timestamp")?;
            let snapshot_timestamp = parse_timestamp(&raw)
                .ok_or_else(|| anyhow!("Invalid snapshot timestamp '{}'", raw))?;
            let current_revenue: Option<f64> = row.try_get("current_revenue")?;

            records.push(SnapshotRecord {
                snapshot: RevenueSnapshot {
                    system_id: row.try_get("system_id")?,
                    current_revenue: current_revenue.unwrap_or(0.0),
                    mrr: row.try_get("mrr")?,
                    arr: row.try_get("arr")?,
                    growth_rate: row.try_get("growth_rate")?,
                    active_customers: row.try_get("active_customers")?,
                },
                snapshot_timestamp,
            });
        }

        Ok(records)
    }
}
