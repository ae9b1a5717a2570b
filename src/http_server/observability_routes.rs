//! Observability HTTP Routes
//!
//! Health check and counters. These are not timed.

use std::sync::Arc;

use axum::extract::State;
use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use crate::observability::MetricsSnapshot;

use super::state::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Counters plus the store's round-trip total
#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    #[serde(flatten)]
    pub counters: MetricsSnapshot,
    pub queries_executed: u64,
    pub cached_pages: usize,
}

/// Create observability routes
pub fn observability_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
}

/// Health check route (also available at root /health)
pub fn health_routes() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health_handler))
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

/// Metrics handler - returns counters as JSON
async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let response = MetricsResponse {
        counters: state.metrics.snapshot(),
        queries_executed: state.store.query_count(),
        cached_pages: state.cache.len(),
    };

    (StatusCode::OK, Json(response))
}
