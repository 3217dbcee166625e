//! Agent registry and task assignment on top of the hub database.

use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::constants::status;
use crate::database::{AgentPerformance, AgentRecord, Database, NewAgent, NewTask};
use crate::errors::{HubError, HubResult};
use crate::types::{CreateTaskRequest, RegisterAgentRequest};

#[derive(Clone)]
pub struct AgentService {
    database: Arc<Database>,
}

impl AgentService {
    pub fn new(database: Arc<Database>) -> Self {
        Self { database }
    }

    /// Store a new active agent and return its generated id.
    pub async fn register_agent(&self, request: RegisterAgentRequest) -> HubResult<String> {
        require("agent_id", &request.agent_id)?;
        require("type", &request.agent_type)?;
        require("system", &request.system)?;
        require("endpoint", &request.endpoint)?;

        let agent = NewAgent {
            id: Uuid::new_v4().to_string(),
            agent_id: request.agent_id.trim().to_string(),
            agent_type: request.agent_type.trim().to_string(),
            system: request.system.trim().to_string(),
            endpoint: request.endpoint.trim().to_string(),
            capabilities: normalize_capabilities(request.capabilities),
            status: status::AGENT_ACTIVE.to_string(),
        };

        self.database.insert_agent(&agent).await?;
        info!(
            "Registered agent {} ({}) for system {}",
            agent.agent_id, agent.id, agent.system
        );

        Ok(agent.id)
    }

    pub async fn list_agents(&self, status: &str) -> HubResult<Vec<AgentRecord>> {
        Ok(self.database.get_agents_by_status(status).await?)
    }

    /// Create a pending task, auto-selecting the best active agent when the
    /// request names none.
    pub async fn assign_task(&self, request: CreateTaskRequest) -> HubResult<String> {
        require("task_name", &request.task_name)?;
        require("task_type", &request.task_type)?;

        let agent_id = request
            .agent_id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty());

        let task = NewTask {
            id: Uuid::new_v4().to_string(),
            task_name: request.task_name,
            task_type: request.task_type,
            agent_id,
        };

        match self.database.create_task(task).await? {
            Some(task) => {
                info!(
                    "Assigned task {} ({}) to agent {}",
                    task.task_name, task.id, task.agent_id
                );
                Ok(task.id)
            }
            None => {
                warn!("Task rejected: no available agents");
                Err(HubError::NoAgentAvailable)
            }
        }
    }

    pub async fn get_agent_performance(&self) -> HubResult<Vec<AgentPerformance>> {
        Ok(self.database.get_agent_performance().await?)
    }
}

fn require(field: &str, value: &str) -> HubResult<()> {
    if value.trim().is_empty() {
        return Err(HubError::InvalidRequest(format!("{} must not be empty", field)));
    }
    Ok(())
}

/// Trimmed, deduplicated and sorted.
fn normalize_capabilities(capabilities: Vec<String>) -> Vec<String> {
    capabilities
        .into_iter()
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
