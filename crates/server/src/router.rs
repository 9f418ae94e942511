//! HTTP router construction.
//!
//! Assembles the engine routes, middleware and OpenAPI docs into a single `Router`.

use std::sync::Arc;

use atelier_core::config::ServerConfig;
use axum::body::Body;
use axum::http::{HeaderValue, Request};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};
use uuid::Uuid;

use crate::api;
use crate::state::AppState;

/// `*` allows any origin; anything else must be a single valid origin.
pub fn cors_layer(origin: &str) -> CorsLayer {
    if origin.trim() == "*" {
        return CorsLayer::permissive();
    }
    match origin.trim().parse::<HeaderValue>() {
        Ok(value) => CorsLayer::new()
            .allow_origin(value)
            .allow_methods(Any)
            .allow_headers(Any),
        Err(e) => {
            warn!(origin, error = %e, "Invalid CORS_ORIGIN; cross-origin requests will be refused");
            CorsLayer::new()
        }
    }
}

/// Build the complete application router with all routes and middleware.
pub fn build_router(state: Arc<AppState>, server: &ServerConfig) -> Router {
    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
        tracing::info_span!(
            "request",
            request_id = %Uuid::new_v4(),
            method = %request.method(),
            path = %request.uri().path(),
        )
    });

    Router::new()
        .route("/health", get(api::health))
        .route("/formal-wear/query", post(api::formal_wear_query))
        .route("/franchise-ops/query", post(api::franchise_ops_query))
        .route("/store-performance/query", post(api::store_performance_query))
        .route("/inventory/query", post(api::inventory_query))
        .layer(cors_layer(&server.cors_origin))
        .layer(trace)
        .with_state(state)
        .merge(Scalar::with_url("/docs", api::doc::ApiDoc::openapi()))
}
