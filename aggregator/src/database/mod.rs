//! Database layer for the revenue aggregator.
//!
//! This module provides persistence for:
//! - The system registry (read-only from this service)
//! - Revenue snapshots (append-only time series)
//!
//! The module is organized into submodules:
//! - `records` - All record types (entities)
//! - `systems` - System registry queries
//! - `snapshots` - Snapshot writes and history rollups
//!
//! Connections go through sqlx's `Any` driver so the same SQL runs against
//! Postgres in production and in-memory SQLite in tests. Queries stick to
//! `$N` placeholders and read every column as TEXT, DOUBLE PRECISION or
//! BIGINT, casting where the stored type may differ.

mod records;
mod snapshots;
mod systems;

pub use records::*;

use anyhow::Result;
use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::AnyPool;
use std::time::Duration;
use tracing::{error, info};

use crate::config::DatabaseConfig;

pub struct Database {
    pool: AnyPool,
}

impl Database {
    /// Expose pool for integration test queries
    #[allow(dead_code)]
    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }

    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        info!("=== Starting database initialization ===");
        info!("Database target: {}", config.display_target());

        let database = Self::connect(
            &config.connection_url(),
            config.min_connections,
            config.max_connections,
        )
        .await?;

        info!("=== Database initialization completed successfully ===");
        Ok(database)
    }

    /// Connect to `url`, then make sure the tables this service uses exist.
    pub async fn connect(url: &str, min_connections: u32, max_connections: u32) -> Result<Self> {
        install_default_drivers();

        let pool = match AnyPoolOptions::new()
            .min_connections(min_connections)
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(10))
            .connect(url)
            .await
        {
            Ok(pool) => {
                info!(
                    "Database connection pool established ({}-{} connections)",
                    min_connections, max_connections
                );
                pool
            }
            Err(e) => {
                error!("FAILED to connect to database: {}", e);
                return Err(e.into());
            }
        };

        Self::with_pool(pool).await
    }

    /// Wrap an existing pool. Tables are created only where missing, so a
    /// pre-provisioned schema is used as-is.
    pub async fn with_pool(pool: AnyPool) -> Result<Self> {
        let database = Self { pool };

        match database.initialize_tables().await {
            Ok(_) => info!("Database tables initialized successfully"),
            Err(e) => {
                error!("CRITICAL: Database table initialization failed: {}", e);
                return Err(e);
            }
        }

        Ok(database)
    }

    async fn initialize_tables(&self) -> Result<()> {
        let systems_table_sql = r#"
            CREATE TABLE IF NOT EXISTS systems (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                url TEXT NOT NULL,
                revenue_endpoint TEXT NOT NULL,
                status TEXT NOT NULL DEFAULT 'active'
            )
        "#;
        if let Err(e) = sqlx::query(systems_table_sql).execute(&self.pool).await {
            error!("FAILED to create systems table: {}", e);
            return Err(e.into());
        }

        let snapshots_table_sql = r#"
            CREATE TABLE IF NOT EXISTS revenue_snapshots (
                system_id TEXT NOT NULL,
                current_revenue DOUBLE PRECISION NOT NULL,
                mrr DOUBLE PRECISION,
                arr DOUBLE PRECISION,
                growth_rate DOUBLE PRECISION,
                active_customers BIGINT,
                snapshot_timestamp TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
        "#;
        if let Err(e) = sqlx::query(snapshots_table_sql).execute(&self.pool).await {
            error!("FAILED to create revenue_snapshots table: {}", e);
            return Err(e.into());
        }

        let snapshots_index_sql = "CREATE INDEX IF NOT EXISTS idx_revenue_snapshots_timestamp ON revenue_snapshots(snapshot_timestamp)";
        if let Err(e) = sqlx::query(snapshots_index_sql).execute(&self.pool).await {
            error!("FAILED to create revenue_snapshots index: {}", e);
            return Err(e.into());
        }

        Ok(())
    }

    /// Pool is open and a trivial query round-trips.
    pub async fn ping(&self) -> Result<()> {
        if self.pool.is_closed() {
            return Err(anyhow::anyhow!("Database pool is closed"));
        }
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database connections closed");
    }
}
