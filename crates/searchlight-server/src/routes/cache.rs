use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use searchlight_core::CacheStats;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn clear(State(state): State<Arc<AppState>>) -> Json<MessageResponse> {
    state.cache.clear();
    info!("🧹 Cache cleared");
    Json(MessageResponse {
        message: "Cache cleared successfully".to_string(),
    })
}

pub async fn stats(State(state): State<Arc<AppState>>) -> Json<CacheStats> {
    Json(state.cache.stats())
}
