//! Agent registration, listing and performance rollups.

use anyhow::{anyhow, Context, Result};
use sqlx::any::AnyRow;
use sqlx::Row;
use tracing::{debug, error};

use super::records::{parse_timestamp, AgentPerformance, AgentRecord, NewAgent};
use super::Database;

impl Database {
    pub async fn insert_agent(&self, agent: &NewAgent) -> Result<()> {
        debug!("Storing agent {} ({})", agent.agent_id, agent.id);

        let capabilities = serde_json::to_string(&agent.capabilities)?;
        let sql = format!(
            r#"
            INSERT INTO ai_agents (id, agent_id, type, system, endpoint, capabilities, status)
            VALUES ($1, $2, $3, $4, $5, {}, $7)
            "#,
            self.dialect.capabilities_value(6)
        );

        let mut conn = self.pool.acquire().await?;

        match sqlx::query(&sql)
            .bind(&agent.id)
            .bind(&agent.agent_id)
            .bind(&agent.agent_type)
            .bind(&agent.system)
            .bind(&agent.endpoint)
            .bind(capabilities)
            .bind(&agent.status)
            .execute(&mut *conn)
            .await
        {
            Ok(_) => Ok(()),
            Err(e) => {
                error!("Failed to store agent {}: {}", agent.agent_id, e);
                Err(e.into())
            }
        }
    }

    pub async fn get_agents_by_status(&self, status: &str) -> Result<Vec<AgentRecord>> {
        let sql = format!(
            r#"
            SELECT CAST(id AS TEXT) AS id, agent_id, type, system, endpoint,
                   {} AS capabilities, status,
                   CAST(performance_score AS DOUBLE PRECISION) AS performance_score,
                   CAST(created_at AS TEXT) AS created_at
            FROM ai_agents
            WHERE status = $1
            ORDER BY created_at ASC, agent_id ASC
            "#,
            self.dialect.capabilities_json("capabilities")
        );

        let mut conn = self.pool.acquire().await?;

        let rows = sqlx::query(&sql)
            .bind(status)
            .fetch_all(&mut *conn)
            .await?;

        let agents = rows
            .iter()
            .map(agent_from_row)
            .collect::<Result<Vec<_>>>()?;

        debug!("Loaded {} agents with status '{}'", agents.len(), status);
        Ok(agents)
    }

    /// Every agent with its task counts, best score first.
    pub async fn get_agent_performance(&self) -> Result<Vec<AgentPerformance>> {
        let mut conn = self.pool.acquire().await?;

        let rows = sqlx::query(
            r#"
            SELECT CAST(a.id AS TEXT) AS id, a.agent_id, a.type, a.system, a.status,
                   CAST(a.performance_score AS DOUBLE PRECISION) AS performance_score,
                   COUNT(t.id) AS total_tasks,
                   COUNT(CASE WHEN t.status = 'pending' THEN 1 END) AS pending_tasks
            FROM ai_agents a
            LEFT JOIN agent_tasks t ON t.agent_id = a.id
            GROUP BY a.id, a.agent_id, a.type, a.system, a.status, a.performance_score
            ORDER BY a.performance_score DESC, a.agent_id ASC
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        let mut performance = Vec::with_capacity(rows.len());
        for row in rows {
            let score: Option<f64> = row.try_get("performance_score")?;
            performance.push(AgentPerformance {
                id: row.try_get("id")?,
                agent_id: row.try_get("agent_id")?,
                agent_type: row.try_get("type")?,
                system: row.try_get("system")?,
                status: row.try_get("status")?,
                performance_score: score.unwrap_or(0.0),
                total_tasks: row.try_get("total_tasks")?,
                pending_tasks: row.try_get("pending_tasks")?,
            });
        }

        Ok(performance)
    }
}

fn agent_from_row(row: &AnyRow) -> Result<AgentRecord> {
    let id: String = row.try_get("id")?;

    // NULL is an empty set; anything else must be a JSON array
    let raw_capabilities: Option<String> = row.try_get("capabilities")?;
    let capabilities = match raw_capabilities {
        Some(raw) => serde_json::from_str(&raw)
            .with_context(|| format!("Agent {} has unreadable capabilities '{}'", id, raw))?,
        None => Vec::new(),
    };

    let raw_created: String = row.try_get("created_at")?;
    let created_at = parse_timestamp(&raw_created)
        .ok_or_else(|| anyhow!("Agent {} has invalid created_at '{}'", id, raw_created))?;
    let score: Option<f64> = row.try_get("performance_score")?;

    Ok(AgentRecord {
        agent_id: row.try_get("agent_id")?,
        agent_type: row.try_get("type")?,
        system: row.try_get("system")?,
        endpoint: row.try_get("endpoint")?,
        capabilities,
        status: row.try_get("status")?,
        performance_score: score.unwrap_or(0.0),
        created_at,
        id,
    })
}
