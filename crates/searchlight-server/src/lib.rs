pub mod config;
pub mod error;
pub mod google;
pub mod routes;
pub mod state;

use crate::state::AppState;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn app(state: Arc<AppState>) -> Router {
    routes::system_routes()
        .merge(routes::report_routes())
        .merge(routes::cache_routes())
        .fallback(routes::system::not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
