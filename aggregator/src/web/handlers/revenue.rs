// Revenue aggregation and history endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use tracing::{error, info};

use super::common::{error_response, internal_error, ApiResult, HistoryQuery};
use crate::database::{history_cutoff, DailyRevenue};
use crate::revenue::AggregationSummary;
use crate::web::AppState;

/// Run one aggregation pass across all active systems
pub async fn get_current_revenue(State(state): State<AppState>) -> ApiResult<AggregationSummary> {
    info!("Revenue aggregation requested");
    match state.aggregator.aggregate_all().await {
        Ok(summary) => Ok(Json(summary)),
        Err(e) => {
            error!("Revenue aggregation failed: {}", e);
            Err(internal_error(e))
        }
    }
}

/// Daily revenue totals over the trailing `days` window
pub async fn get_revenue_history(
    Query(query): Query<HistoryQuery>,
    State(state): State<AppState>,
) -> ApiResult<Vec<DailyRevenue>> {
    if history_cutoff(query.days, Utc::now()).is_none() {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            format!("days must be a positive number of days, got {}", query.days),
        ));
    }

    match state.database.get_revenue_history(query.days).await {
        Ok(history) => Ok(Json(history)),
        Err(e) => {
            error!("Failed to load revenue history: {}", e);
            Err(internal_error(e))
        }
    }
}
