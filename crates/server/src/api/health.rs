//! Liveness and executor readiness.

use std::sync::Arc;

use atelier_intent::Engine;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct ExecutorStatus {
    pub name: String,
    pub ready: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// URL slugs of the mounted engines.
    pub engines: Vec<String>,
    pub executor: ExecutorStatus,
}

/// Always 200; `executor.ready` is false when the warehouse is not configured.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is up", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        engines: Engine::ALL.iter().map(|e| e.slug().to_string()).collect(),
        executor: ExecutorStatus {
            name: state.executor.name().to_string(),
            ready: state.executor.is_ready(),
        },
    })
}
