pub mod cache;
pub mod ga4;
pub mod gsc;
pub mod params;
pub mod scoreboard;
pub mod system;

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use searchlight_core::error::ProviderResult;
use std::any::Any;
use std::future::Future;
use std::sync::Arc;

pub fn system_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(system::health))
        .route("/api/health", get(system::health))
}

pub fn report_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/gsc/top", get(gsc::top_pages))
        .route("/api/gsc/queries", get(gsc::queries))
        .route("/api/gsc/daily", get(gsc::daily))
        .route("/api/ga4/pages", get(ga4::pages))
        .route("/api/ga4/metrics", get(ga4::metrics))
        .route("/api/scoreboard", get(scoreboard::get_scoreboard))
}

pub fn cache_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/cache/clear", post(cache::clear))
        .route("/api/cache/stats", get(cache::stats))
}

/// Serves `key` from the shared cache or runs `fetch`, tagging failures with `code`.
pub(crate) async fn cached<T, F, Fut>(
    state: &AppState,
    key: String,
    code: &'static str,
    fetch: F,
) -> AppResult<Arc<T>>
where
    T: Any + Send + Sync,
    F: FnOnce() -> Fut,
    Fut: Future<Output = ProviderResult<T>>,
{
    state
        .cache
        .get_or_insert_with(&key, state.cache_ttl(), fetch)
        .await
        .map_err(AppError::provider(code))
}
