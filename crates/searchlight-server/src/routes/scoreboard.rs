use super::params::ReportQuery;
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::Json;
use searchlight_core::score::PriorityScore;
use std::sync::Arc;

pub async fn get_scoreboard(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<Arc<Vec<PriorityScore>>>> {
    let range = query.range()?;

    let scores = state
        .scoreboard
        .get_scoreboard(range, None)
        .await
        .map_err(AppError::provider("SCOREBOARD_ERROR"))?;

    Ok(Json(scores))
}
