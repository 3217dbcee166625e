use serde::{Deserialize, Serialize};

use crate::constants::{service, status};

// === REQUEST STRUCTURES ===

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterAgentRequest {
    pub agent_id: String,
    #[serde(rename = "type")]
    pub agent_type: String,
    pub system: String,
    pub endpoint: String,
    pub capabilities: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskRequest {
    pub task_name: String,
    pub task_type: String,
    /// Blank or missing means "pick the best active agent"
    #[serde(default)]
    pub agent_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AgentsQuery {
    #[serde(default = "default_agent_status")]
    pub status: String,
}

fn default_agent_status() -> String {
    status::AGENT_ACTIVE.to_string()
}

// === RESPONSE STRUCTURES ===

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterAgentResponse {
    pub agent_id: String,
    pub status: String,
}

impl RegisterAgentResponse {
    pub fn registered(agent_id: String) -> Self {
        Self {
            agent_id,
            status: status::REGISTERED.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTaskResponse {
    pub task_id: String,
    pub status: String,
}

impl CreateTaskResponse {
    pub fn assigned(task_id: String) -> Self {
        Self {
            task_id,
            status: status::ASSIGNED.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

impl StatusResponse {
    pub fn operational() -> Self {
        Self {
            status: "operational".to_string(),
            service: service::NAME.to_string(),
            version: service::VERSION.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
