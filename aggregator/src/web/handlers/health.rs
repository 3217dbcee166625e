// Liveness and readiness endpoints

use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;
use tracing::warn;

use super::common::{error_response, ApiResult};
use crate::constants::service;
use crate::web::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: service::NAME,
        version: service::VERSION,
    })
}

pub async fn readiness_check(State(state): State<AppState>) -> ApiResult<ReadyResponse> {
    match state.database.ping().await {
        Ok(()) => Ok(Json(ReadyResponse { status: "ready" })),
        Err(e) => {
            warn!("Readiness check failed: {}", e);
            Err(error_response(
                StatusCode::SERVICE_UNAVAILABLE,
                "Database not ready",
            ))
        }
    }
}
