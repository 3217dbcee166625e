use hub::types::{CreateTaskRequest, RegisterAgentRequest};

pub fn agent_request(agent_id: &str, capabilities: &[&str]) -> RegisterAgentRequest {
    RegisterAgentRequest {
        agent_id: agent_id.to_string(),
        agent_type: "optimizer".to_string(),
        system: "billing".to_string(),
        endpoint: format!("http://agents.internal/{}", agent_id),
        capabilities: capabilities.iter().map(|c| c.to_string()).collect(),
    }
}

pub fn task_request(task_name: &str, agent_id: Option<&str>) -> CreateTaskRequest {
    CreateTaskRequest {
        task_name: task_name.to_string(),
        task_type: "analysis".to_string(),
        agent_id: agent_id.map(String::from),
    }
}

/// Hub tables as provisioned outside this service: decimal scores and
/// database-filled `TIMESTAMP` columns.
pub const PROVISIONED_SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE ai_agents (
        id VARCHAR(36) PRIMARY KEY,
        agent_id VARCHAR(100) NOT NULL,
        type VARCHAR(50) NOT NULL,
        system VARCHAR(50) NOT NULL,
        endpoint VARCHAR(255) NOT NULL,
        capabilities TEXT,
        status VARCHAR(20) DEFAULT 'active',
        performance_score DECIMAL(5, 2) DEFAULT 0,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    r#"
    CREATE TABLE agent_tasks (
        id VARCHAR(36) PRIMARY KEY,
        agent_id VARCHAR(36) NOT NULL,
        task_name VARCHAR(255) NOT NULL,
        task_type VARCHAR(50) NOT NULL,
        status VARCHAR(20) DEFAULT 'pending',
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
    "#,
];
