//! Task assignment.

use anyhow::Result;
use sqlx::Row;
use tracing::{debug, error, info};

use super::records::AssignedTask;
use super::Database;
use crate::constants::status;

/// Fields of a task before an agent has been bound to it.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub id: String,
    pub task_name: String,
    pub task_type: String,
    /// Caller-chosen agent; `None` picks the best active agent.
    pub agent_id: Option<String>,
}

impl Database {
    /// Resolve the target agent and insert the task on one connection.
    ///
    /// Returns `Ok(None)` when auto-selection finds no active agent, in
    /// which case nothing is written.
    pub async fn create_task(&self, task: NewTask) -> Result<Option<AssignedTask>> {
        let mut conn = self.pool.acquire().await?;

        let agent_id = match task.agent_id {
            Some(agent_id) => agent_id,
            None => {
                let row = sqlx::query(
                    r#"
                    SELECT CAST(id AS TEXT) AS id FROM ai_agents
                    WHERE status = $1
                    ORDER BY performance_score DESC
                    LIMIT 1
                    "#,
                )
                .bind(status::AGENT_ACTIVE)
                .fetch_optional(&mut *conn)
                .await?;

                match row {
                    Some(row) => {
                        let id: String = row.try_get("id")?;
                        debug!("Auto-selected agent {} for task {}", id, task.task_name);
                        id
                    }
                    None => {
                        info!("No active agent available for task {}", task.task_name);
                        return Ok(None);
                    }
                }
            }
        };

        let assigned = AssignedTask {
            id: task.id,
            agent_id,
            task_name: task.task_name,
            task_type: task.task_type,
            status: status::TASK_PENDING.to_string(),
        };

        if let Err(e) = sqlx::query(
            r#"
            INSERT INTO agent_tasks (id, agent_id, task_name, task_type, status)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&assigned.id)
        .bind(&assigned.agent_id)
        .bind(&assigned.task_name)
        .bind(&assigned.task_type)
        .bind(&assigned.status)
        .execute(&mut *conn)
        .await
        {
            error!("Failed to store task {}: {}", assigned.task_name, e);
            return Err(e.into());
        }

        Ok(Some(assigned))
    }
}
