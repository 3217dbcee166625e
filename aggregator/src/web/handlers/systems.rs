// System registry endpoints

use axum::{extract::State, response::Json};
use tracing::error;

use super::common::{internal_error, ApiResult};
use crate::database::SystemRecord;
use crate::web::AppState;

pub async fn list_systems(State(state): State<AppState>) -> ApiResult<Vec<SystemRecord>> {
    match state.database.get_all_systems().await {
        Ok(systems) => Ok(Json(systems)),
        Err(e) => {
            error!("Failed to list systems: {}", e);
            Err(internal_error(e))
        }
    }
}
