use super::cached;
use super::params::ReportQuery;
use crate::error::AppResult;
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::Json;
use searchlight_core::consts::{DEFAULT_QUERIES_LIMIT, DEFAULT_TOP_PAGES_LIMIT};
use searchlight_core::error::ProviderError;
use searchlight_core::stats::{DailySearchStats, PageSearchStats, QueryStats};
use std::sync::Arc;

pub async fn top_pages(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<Arc<Vec<PageSearchStats>>>> {
    let range = query.range()?;
    let limit = query.limit(DEFAULT_TOP_PAGES_LIMIT)?;

    let provider = &state.provider;
    let key = format!("gsc:top:{}:{}", range, limit);
    let rows = cached(&state, key, "GSC_TOP_ERROR", move || async move {
        let mut rows = provider.top_pages(&range, limit).await?;
        rows.sort_by(|a, b| b.impressions.cmp(&a.impressions));
        rows.truncate(limit);
        Ok::<_, ProviderError>(rows)
    })
    .await?;

    Ok(Json(rows))
}

pub async fn queries(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<Arc<Vec<QueryStats>>>> {
    let range = query.range()?;
    let limit = query.limit(DEFAULT_QUERIES_LIMIT)?;
    let page = query.page()?;

    let provider = &state.provider;
    let key = format!("gsc:queries:{}:{}:{}", page, range, limit);
    let rows = cached(&state, key, "GSC_QUERIES_ERROR", move || async move {
        let mut rows = provider.queries_for_page(&range, page, limit).await?;
        rows.sort_by(|a, b| b.impressions.cmp(&a.impressions));
        rows.truncate(limit);
        Ok::<_, ProviderError>(rows)
    })
    .await?;

    Ok(Json(rows))
}

pub async fn daily(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<Arc<Vec<DailySearchStats>>>> {
    let range = query.range()?;

    let provider = &state.provider;
    let key = format!("gsc:daily:{}", range);
    let rows = cached(&state, key, "GSC_DAILY_ERROR", move || async move {
        provider.daily_search(&range).await
    })
    .await?;

    Ok(Json(rows))
}
