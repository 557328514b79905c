use super::cached;
use super::params::ReportQuery;
use crate::error::AppResult;
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::Json;
use searchlight_core::stats::{PageEngagementStats, SiteMetrics};
use std::sync::Arc;

pub async fn pages(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<Arc<Vec<PageEngagementStats>>>> {
    let range = query.range()?;

    let provider = &state.provider;
    let key = format!("ga4:pages:{}", range);
    let rows = cached(&state, key, "GA4_PAGES_ERROR", move || async move {
        provider.pages_aggregate(&range).await
    })
    .await?;

    Ok(Json(rows))
}

pub async fn metrics(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<Arc<SiteMetrics>>> {
    let range = query.range()?;

    let provider = &state.provider;
    let key = format!("ga4:metrics:{}", range);
    let totals = cached(&state, key, "GA4_METRICS_ERROR", move || async move {
        provider.site_metrics(&range).await
    })
    .await?;

    Ok(Json(totals))
}
