//! Observability HTTP Routes
//!
//! Health check, service info and counters.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::observability::MetricsSnapshot;

use super::server::API_PREFIX;
use super::state::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Service description
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub name: String,
    pub version: String,
    pub started_at: DateTime<Utc>,
    pub translations: Vec<String>,
    pub endpoints: BTreeMap<&'static str, String>,
}

/// Health check route, mounted at the root
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

/// Service info route, mounted at the root
pub fn info_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/info", get(info_handler))
        .with_state(state)
}

/// Create observability routes
pub fn observability_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "UP".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

async fn info_handler(State(state): State<Arc<AppState>>) -> Json<InfoResponse> {
    let mut endpoints = BTreeMap::new();
    endpoints.insert("health", "/health".to_string());
    endpoints.insert("metrics", "/observability/metrics".to_string());
    endpoints.insert("translations", format!("{}/translations", API_PREFIX));

    Json(InfoResponse {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        started_at: state.started_at(),
        translations: state
            .registry()
            .list_identifiers()
            .into_iter()
            .map(str::to_string)
            .collect(),
        endpoints,
    })
}

async fn metrics_handler(State(state): State<Arc<AppState>>) -> Json<MetricsSnapshot> {
    Json(state.metrics().snapshot())
}
