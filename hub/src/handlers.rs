//! HTTP request handlers for the agent hub

use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson, Response},
};
use std::sync::Arc;
use tracing::error;

use crate::database::{AgentPerformance, AgentRecord};
use crate::errors::HubError;
use crate::types::*;
use crate::AppState;

impl IntoResponse for HubError {
    fn into_response(self) -> Response {
        let status = match &self {
            HubError::NoAgentAvailable => StatusCode::NOT_FOUND,
            HubError::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            HubError::Database(e) => {
                error!("Database error: {:#}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let detail = match &self {
            HubError::Database(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };

        (status, ResponseJson(ErrorResponse { detail })).into_response()
    }
}

// === Status ===

pub async fn get_status() -> ResponseJson<StatusResponse> {
    ResponseJson(StatusResponse::operational())
}

// === Agent handlers ===

pub async fn register_agent(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegisterAgentRequest>,
) -> Result<ResponseJson<RegisterAgentResponse>, HubError> {
    let agent_id = state.agent_service.register_agent(request).await?;
    Ok(ResponseJson(RegisterAgentResponse::registered(agent_id)))
}

pub async fn list_agents(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AgentsQuery>,
) -> Result<ResponseJson<Vec<AgentRecord>>, HubError> {
    let agents = state.agent_service.list_agents(&query.status).await?;
    Ok(ResponseJson(agents))
}

pub async fn get_agent_performance(
    State(state): State<Arc<AppState>>,
) -> Result<ResponseJson<Vec<AgentPerformance>>, HubError> {
    let performance = state.agent_service.get_agent_performance().await?;
    Ok(ResponseJson(performance))
}

// === Task handlers ===

pub async fn create_task(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateTaskRequest>,
) -> Result<ResponseJson<CreateTaskResponse>, HubError> {
    let task_id = state.agent_service.assign_task(request).await?;
    Ok(ResponseJson(CreateTaskResponse::assigned(task_id)))
}
