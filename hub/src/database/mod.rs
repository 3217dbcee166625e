//! Database layer for the agent hub.
//!
//! - `records` - Agent, task and performance entities
//! - `agents` - Registration and listing
//! - `tasks` - Task assignment
//!
//! Same `Any`-driver approach as the aggregator: Postgres in production,
//! in-memory SQLite under test, `$N` placeholders everywhere. Columns whose
//! provisioned type may vary are cast on read; the capabilities array is the
//! one place where the SQL differs per backend (see [`Dialect`]).

mod agents;
mod records;
mod tasks;

pub use records::*;
pub use tasks::NewTask;

use anyhow::{anyhow, Result};
use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::AnyPool;
use std::time::Duration;
use tracing::{error, info};

use crate::config::DatabaseConfig;

/// Backend-specific SQL for the `capabilities` column.
///
/// Postgres keeps it as `TEXT[]`; SQLite has no arrays and stores the JSON
/// text. Both sides exchange the list with Rust as a JSON array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Postgres,
    Sqlite,
}

impl Dialect {
    pub fn from_backend(name: &str) -> Result<Self> {
        match name {
            "PostgreSQL" => Ok(Self::Postgres),
            "SQLite" => Ok(Self::Sqlite),
            other => Err(anyhow!("Unsupported database backend: {}", other)),
        }
    }

    fn capabilities_column(self) -> &'static str {
        match self {
            Self::Postgres => "TEXT[] NOT NULL DEFAULT '{}'",
            Self::Sqlite => "TEXT NOT NULL DEFAULT '[]'",
        }
    }

    /// Expression storing the JSON array bound at `$param`.
    fn capabilities_value(self, param: usize) -> String {
        match self {
            Self::Postgres => format!(
                "ARRAY(SELECT json_array_elements_text(CAST(${} AS JSON)))",
                param
            ),
            Self::Sqlite => format!("${}", param),
        }
    }

    /// `column` rendered as JSON array text.
    fn capabilities_json(self, column: &str) -> String {
        match self {
            Self::Postgres => format!("CAST(array_to_json({}) AS TEXT)", column),
            Self::Sqlite => column.to_string(),
        }
    }
}

pub struct Database {
    pool: AnyPool,
    dialect: Dialect,
}

impl Database {
    /// Expose pool for integration test queries
    #[allow(dead_code)]
    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        info!("Connecting to database at {}", config.display_target());
        Self::connect(
            &config.connection_url(),
            config.min_connections,
            config.max_connections,
        )
        .await
    }

    pub async fn connect(url: &str, min_connections: u32, max_connections: u32) -> Result<Self> {
        install_default_drivers();

        let pool = AnyPoolOptions::new()
            .min_connections(min_connections)
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(10))
            .connect(url)
            .await
            .map_err(|e| {
                error!("FAILED to connect to database: {}", e);
                e
            })?;
        info!("Agent Hub database connection established");

        Self::with_pool(pool).await
    }

    /// Wrap an existing pool, creating only the tables that are missing.
    pub async fn with_pool(pool: AnyPool) -> Result<Self> {
        let dialect = {
            let conn = pool.acquire().await?;
            Dialect::from_backend(conn.backend_name())?
        };

        let database = Self { pool, dialect };
        database.initialize_tables().await?;
        Ok(database)
    }

    async fn initialize_tables(&self) -> Result<()> {
        let agents_table = format!(
            r#"
            CREATE TABLE IF NOT EXISTS ai_agents (
                id TEXT PRIMARY KEY,
                agent_id TEXT NOT NULL,
                type TEXT NOT NULL,
                system TEXT NOT NULL,
                endpoint TEXT NOT NULL,
                capabilities {},
                status TEXT NOT NULL DEFAULT 'active',
                performance_score DOUBLE PRECISION NOT NULL DEFAULT 0,
                created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            "#,
            self.dialect.capabilities_column()
        );

        let statements = [
            ("ai_agents table", agents_table.as_str()),
            (
                "ai_agents index",
                "CREATE INDEX IF NOT EXISTS idx_ai_agents_status_score ON ai_agents(status, performance_score)",
            ),
            (
                "agent_tasks table",
                r#"
                CREATE TABLE IF NOT EXISTS agent_tasks (
                    id TEXT PRIMARY KEY,
                    agent_id TEXT NOT NULL,
                    task_name TEXT NOT NULL,
                    task_type TEXT NOT NULL,
                    status TEXT NOT NULL DEFAULT 'pending',
                    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
                )
                "#,
            ),
            (
                "agent_tasks index",
                "CREATE INDEX IF NOT EXISTS idx_agent_tasks_agent ON agent_tasks(agent_id)",
            ),
        ];

        for (label, sql) in statements {
            if let Err(e) = sqlx::query(sql).execute(&self.pool).await {
                error!("FAILED to create {}: {}", label, e);
                return Err(e.into());
            }
        }

        info!("Agent Hub tables initialized ({:?})", self.dialect);
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("Agent Hub database connections closed");
    }
}
