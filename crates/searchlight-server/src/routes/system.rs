use crate::error::AppError;
use crate::state::AppState;
use axum::extract::State;
use axum::http::{Method, Uri};
use axum::Json;
use chrono::{SecondsFormat, Utc};
use searchlight_core::ProviderMode;
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub ok: bool,
    pub mode: ProviderMode,
    pub site_url_configured: bool,
    pub ga4_property_configured: bool,
    pub cache_ttl_seconds: u64,
    pub timestamp: String,
    pub uptime_seconds: f64,
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        mode: state.provider.mode(),
        site_url_configured: state.site_url_configured,
        ga4_property_configured: state.ga4_property_configured,
        cache_ttl_seconds: state.cache_ttl().as_secs(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        uptime_seconds: state.started_at.elapsed().as_secs_f64(),
    })
}

pub async fn not_found(method: Method, uri: Uri) -> AppError {
    AppError::NotFound(format!("{} {}", method, uri))
}
