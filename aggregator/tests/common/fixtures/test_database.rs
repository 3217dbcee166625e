//! Test database utilities for in-memory SQLite testing

use aggregator::Database;
use anyhow::Result;
use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::Row;
use std::sync::Arc;

/// Test database wrapper around an in-memory SQLite pool
pub struct TestDatabase {
    pub database: Arc<Database>,
}

impl TestDatabase {
    /// Create a new in-memory test database with the service tables
    pub async fn new() -> Result<Self> {
        // One connection: every connection to :memory: is its own database
        let database = Database::connect("sqlite::memory:", 1, 1).await?;
        Ok(Self {
            database: Arc::new(database),
        })
    }

    /// In-memory database whose tables were created up front by `schema`
    pub async fn provisioned(schema: &[&str]) -> Result<Self> {
        install_default_drivers();
        let pool = AnyPoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        for statement in schema {
            sqlx::query(statement).execute(&pool).await?;
        }

        let database = Database::with_pool(pool).await?;
        Ok(Self {
            database: Arc::new(database),
        })
    }

    pub fn database(&self) -> Arc<Database> {
        self.database.clone()
    }

    /// Register a system the way an operator would, out-of-band
    pub async fn insert_system(
        &self,
        id: &str,
        name: &str,
        url: &str,
        revenue_endpoint: &str,
        status: &str,
    ) -> Result<()> {
        sqlx::query(
            "INSERT INTO systems (id, name, url, revenue_endpoint, status) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(id)
        .bind(name)
        .bind(url)
        .bind(revenue_endpoint)
        .bind(status)
        .execute(self.database.pool())
        .await?;
        Ok(())
    }

    /// Insert a snapshot row with a caller-chosen timestamp
    pub async fn insert_snapshot_at(
        &self,
        system_id: &str,
        current_revenue: f64,
        snapshot_timestamp: &str,
    ) -> Result<()> {
        sqlx::query(
            "INSERT INTO revenue_snapshots (system_id, current_revenue, snapshot_timestamp) VALUES ($1, $2, $3)",
        )
        .bind(system_id)
        .bind(current_revenue)
        .bind(snapshot_timestamp)
        .execute(self.database.pool())
        .await?;
        Ok(())
    }

    pub async fn snapshot_count(&self) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM revenue_snapshots")
            .fetch_one(self.database.pool())
            .await?;
        Ok(row.try_get("count")?)
    }
}
