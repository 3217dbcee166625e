//! System registry queries.

use anyhow::Result;
use sqlx::Row;
use tracing::debug;

use super::records::SystemRecord;
use super::Database;

impl Database {
    /// All systems with `status = 'active'`.
    pub async fn get_all_systems(&self) -> Result<Vec<SystemRecord>> {
        let mut conn = self.pool.acquire().await?;

        let rows = sqlx::query(
            r#"
            SELECT CAST(id AS TEXT) AS id, name, url, revenue_endpoint, status
            FROM systems
            WHERE status = 'active'
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        let mut systems = Vec::with_capacity(rows.len());
        for row in rows {
            systems.push(SystemRecord {
                id: row.try_get("id")?,
                name: row.try_get("name")?,
                url: row.try_get("url")?,
                revenue_endpoint: row.try_get("revenue_endpoint")?,
                status: row.try_get("status")?,
            });
        }

        debug!("Loaded {} active systems", systems.len());
        Ok(systems)
    }
}
