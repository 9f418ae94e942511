//! Engine query endpoints: classify the question, plan and run the report,
//! then analyze and format the rows.

use std::sync::Arc;
use std::time::Instant;

use atelier_core::{QueryError, Row};
use atelier_insight::{analyze, format, prepare, QueryInterpretation};
use atelier_intent::{Category, Engine, Entities, QueryContext};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{NaiveDate, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::planner::{plan, PlanInput, QueryPlan};
use crate::state::AppState;

pub const FAILURE_SUGGESTION: &str = "Please check your query syntax or try a different question";

// ── Request ───────────────────────────────────────────────────────

/// Body accepted by every engine endpoint. All fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct QueryBody {
    /// Free-text question, Turkish or English.
    pub question: Option<String>,
    /// Category override, e.g. `size_analysis`. Unknown values are ignored.
    pub query_type: Option<String>,
    /// Row limit, clamped to the configured maximum.
    pub limit: Option<i64>,
    pub store_id: Option<String>,
    /// Days to look back when the question names no period.
    pub date_range: Option<i64>,
    /// Units to split across stores (inventory allocation).
    pub quantity: Option<i64>,
    /// Product code filter for inventory reports.
    pub sku: Option<String>,
}

/// Malformed JSON and non-object bodies count as `{}`; an object whose fields
/// have the wrong types is rejected.
pub fn parse_body(bytes: &[u8]) -> Result<QueryBody, serde_json::Error> {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(value @ Value::Object(_)) => serde_json::from_value(value),
        _ => Ok(QueryBody::default()),
    }
}

// ── Envelopes ─────────────────────────────────────────────────────

#[derive(Debug, Serialize, ToSchema)]
pub struct QueryParameters {
    pub question: String,
    pub template: String,
    pub limit: u32,
    pub store_id: Option<String>,
    pub country: Option<String>,
    pub date_range: Option<i64>,
    /// Allocated units; allocation reports only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[schema(value_type = String, format = Date)]
    pub start_date: NaiveDate,
    #[schema(value_type = String, format = Date)]
    pub end_date: NaiveDate,
    #[schema(value_type = Object)]
    pub detected_entities: Entities,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QuerySummary {
    pub total_records: usize,
    pub query_type: String,
    pub execution_time_ms: u64,
    pub timestamp: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QuerySuccess {
    pub success: bool,
    pub engine: String,
    pub query_type: String,
    pub parameters: QueryParameters,
    pub summary: QuerySummary,
    pub executive_summary: String,
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
    pub alerts: Vec<String>,
    #[schema(value_type = Object)]
    pub metrics_summary: IndexMap<String, f64>,
    pub confidence_score: f64,
    pub suggested_queries: Vec<String>,
    #[schema(value_type = Object)]
    pub query_interpretation: QueryInterpretation,
    pub row_count: usize,
    #[schema(value_type = Vec<Object>)]
    pub rows: Vec<Row>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QueryFailure {
    pub success: bool,
    pub error: String,
    pub error_type: String,
    pub engine: String,
    pub query_type: String,
    pub timestamp: String,
    pub suggestion: String,
}

impl QueryFailure {
    pub fn new(engine: Engine, query_type: &str, error_type: &str, error: String) -> Self {
        Self {
            success: false,
            error,
            error_type: error_type.to_string(),
            engine: engine.as_str().to_string(),
            query_type: query_type.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            suggestion: FAILURE_SUGGESTION.to_string(),
        }
    }

    pub fn from_query_error(engine: Engine, query_type: &str, err: &QueryError) -> Self {
        Self::new(engine, query_type, err.kind(), err.to_string())
    }
}

/// Analyze `rows` and assemble the success envelope.
pub fn build_success(
    state: &AppState,
    context: &QueryContext,
    plan: &QueryPlan,
    body: &QueryBody,
    rows: Vec<Row>,
    started: Instant,
) -> QuerySuccess {
    let category = context.detected_category;
    let outcome = analyze(&rows, category, context, &state.thresholds);
    let report = format(&outcome, context);

    QuerySuccess {
        success: true,
        engine: context.engine.as_str().to_string(),
        query_type: category.as_str().to_string(),
        parameters: QueryParameters {
            question: context.original_text.clone(),
            template: plan.request.template_id.clone(),
            limit: plan.limit,
            store_id: plan.store_id.clone(),
            country: plan.country.map(str::to_string),
            date_range: body.date_range,
            quantity: (category == Category::Allocation).then_some(plan.quantity),
            start_date: plan.window.start,
            end_date: plan.window.end,
            detected_entities: context.entities.clone(),
        },
        summary: QuerySummary {
            total_records: rows.len(),
            query_type: category.as_str().to_string(),
            execution_time_ms: started.elapsed().as_millis() as u64,
            timestamp: Utc::now().to_rfc3339(),
        },
        executive_summary: report.executive_summary,
        insights: report.insights,
        recommendations: report.recommendations,
        alerts: report.alerts,
        metrics_summary: report.metrics_summary,
        confidence_score: report.confidence_score,
        suggested_queries: report.suggested_queries,
        query_interpretation: report.query_interpretation,
        row_count: rows.len(),
        rows,
    }
}

// ── Handlers ──────────────────────────────────────────────────────

async fn run(state: &AppState, engine: Engine, bytes: &[u8]) -> Response {
    let started = Instant::now();

    let body = match parse_body(bytes) {
        Ok(body) => body,
        Err(e) => {
            warn!(engine = %engine, error = %e, "Rejected query body");
            let failure = QueryFailure::new(engine, "unknown", "InvalidRequest", e.to_string());
            return (StatusCode::BAD_REQUEST, Json(failure)).into_response();
        }
    };

    let question = body.question.as_deref().unwrap_or_default();
    let context = QueryContext::build(state.registry(engine), question, body.query_type.as_deref());
    let input = PlanInput {
        limit: body.limit,
        store_id: body.store_id.clone(),
        date_range: body.date_range,
        quantity: body.quantity,
        sku: body.sku.clone(),
    };
    let plan = plan(&context, &input, &state.engine, &state.thresholds);
    let query_type = context.detected_category.as_str();

    info!(
        engine = %engine,
        query_type,
        confidence = context.confidence,
        template = %plan.request.template_id,
        limit = plan.limit,
        "Processing query"
    );

    match state.executor.execute(&plan.request).await {
        Ok(mut rows) => {
            prepare(context.detected_category, &mut rows);
            let success = build_success(state, &context, &plan, &body, rows, started);
            info!(
                engine = %engine,
                query_type,
                rows = success.row_count,
                insights = success.insights.len(),
                elapsed_ms = success.summary.execution_time_ms,
                "Query completed"
            );
            (StatusCode::OK, Json(success)).into_response()
        }
        Err(e) => {
            warn!(engine = %engine, query_type, error_type = e.kind(), error = %e, "Query failed");
            let failure = QueryFailure::from_query_error(engine, query_type, &e);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(failure)).into_response()
        }
    }
}

/// Formal-wear sales, bundles, sizing, seasons and cross-market comparisons.
#[utoipa::path(
    post,
    path = "/formal-wear/query",
    tag = "Engines",
    request_body = QueryBody,
    responses(
        (status = 200, description = "Analyzed report", body = QuerySuccess),
        (status = 400, description = "Wrongly typed request field", body = QueryFailure),
        (status = 500, description = "Query execution failed", body = QueryFailure)
    )
)]
pub async fn formal_wear_query(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    run(&state, Engine::FormalWear, &body).await
}

/// Franchise partners, store network, expansion pipeline and support tickets.
#[utoipa::path(
    post,
    path = "/franchise-ops/query",
    tag = "Engines",
    request_body = QueryBody,
    responses(
        (status = 200, description = "Analyzed report", body = QuerySuccess),
        (status = 400, description = "Wrongly typed request field", body = QueryFailure),
        (status = 500, description = "Query execution failed", body = QueryFailure)
    )
)]
pub async fn franchise_ops_query(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    run(&state, Engine::FranchiseOps, &body).await
}

/// Daily store performance, comparisons, staff, traffic and KPI tracking.
#[utoipa::path(
    post,
    path = "/store-performance/query",
    tag = "Engines",
    request_body = QueryBody,
    responses(
        (status = 200, description = "Analyzed report", body = QuerySuccess),
        (status = 400, description = "Wrongly typed request field", body = QueryFailure),
        (status = 500, description = "Query execution failed", body = QueryFailure)
    )
)]
pub async fn store_performance_query(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    run(&state, Engine::StorePerformance, &body).await
}

/// Replenishment, stockout risk, demand forecast, stock health, allocation
/// and inter-store transfers.
#[utoipa::path(
    post,
    path = "/inventory/query",
    tag = "Engines",
    request_body = QueryBody,
    responses(
        (status = 200, description = "Analyzed report", body = QuerySuccess),
        (status = 400, description = "Wrongly typed request field", body = QueryFailure),
        (status = 500, description = "Query execution failed", body = QueryFailure)
    )
)]
pub async fn inventory_query(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    run(&state, Engine::Inventory, &body).await
}
