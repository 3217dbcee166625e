//! Database record types (entities).

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentRecord {
    pub id: String,
    pub agent_id: String,
    #[serde(rename = "type")]
    pub agent_type: String,
    pub system: String,
    pub endpoint: String,
    pub capabilities: Vec<String>,
    pub status: String,
    pub performance_score: f64,
    pub created_at: DateTime<Utc>,
}

/// Agent row as written at registration. Score and `created_at` come from
/// column defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAgent {
    pub id: String,
    pub agent_id: String,
    pub agent_type: String,
    pub system: String,
    pub endpoint: String,
    pub capabilities: Vec<String>,
    pub status: String,
}

/// A task as stored by `create_task`, with the agent it was bound to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignedTask {
    pub id: String,
    pub agent_id: String,
    pub task_name: String,
    pub task_type: String,
    pub status: String,
}

/// Per-agent rollup served by `/performance`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentPerformance {
    pub id: String,
    pub agent_id: String,
    #[serde(rename = "type")]
    pub agent_type: String,
    pub system: String,
    pub status: String,
    pub performance_score: f64,
    pub total_tasks: i64,
    pub pending_tasks: i64,
}

/// Timestamp column read back as text; values without an offset are UTC.
pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%#z") {
        return Some(timestamp.with_timezone(&Utc));
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(timestamp.and_utc());
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|timestamp| timestamp.with_timezone(&Utc))
}
