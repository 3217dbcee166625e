//! Test database utilities for in-memory SQLite testing

use anyhow::Result;
use hub::Database;
use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::Row;
use std::sync::Arc;

pub struct TestDatabase {
    pub database: Arc<Database>,
}

impl TestDatabase {
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

    /// Scores are maintained outside this service
    pub async fn set_score(&self, id: &str, score: f64) -> Result<()> {
        sqlx::query("UPDATE ai_agents SET performance_score = $1 WHERE id = $2")
            .bind(score)
            .bind(id)
            .execute(self.database.pool())
            .await?;
        Ok(())
    }

    pub async fn set_status(&self, id: &str, status: &str) -> Result<()> {
        sqlx::query("UPDATE ai_agents SET status = $1 WHERE id = $2")
            .bind(status)
            .bind(id)
            .execute(self.database.pool())
            .await?;
        Ok(())
    }

    /// Overwrite the stored capabilities column verbatim
    pub async fn set_raw_capabilities(&self, id: &str, raw: &str) -> Result<()> {
        sqlx::query("UPDATE ai_agents SET capabilities = $1 WHERE id = $2")
            .bind(raw)
            .bind(id)
            .execute(self.database.pool())
            .await?;
        Ok(())
    }

    pub async fn task_count(&self) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM agent_tasks")
            .fetch_one(self.database.pool())
            .await?;
        Ok(row.try_get("count")?)
    }

    /// `(agent_id, status)` of a stored task
    pub async fn task(&self, task_id: &str) -> Result<Option<(String, String)>> {
        let row = sqlx::query("SELECT agent_id, status FROM agent_tasks WHERE id = $1")
            .bind(task_id)
            .fetch_optional(self.database.pool())
            .await?;

        match row {
            Some(row) => Ok(Some((row.try_get("agent_id")?, row.try_get("status")?))),
            None => Ok(None),
        }
    }
}
