use std::sync::Arc;

use atelier_core::{ParamValue, Row};
use atelier_insight::ThresholdConfig;
use atelier_server::router::build_router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use atelier_core::config::ServerConfig;

use crate::{state, state_with, InMemoryExecutor};

fn server_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".into(),
        port: 0,
        cors_origin: "*".into(),
    }
}

fn app(executor: Arc<InMemoryExecutor>) -> Router {
    build_router(state(executor), &server_config())
}

async fn post(app: Router, path: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn comparison_rows() -> Vec<Row> {
    vec![
        Row::new()
            .with("store_id", "SV001")
            .with("store_name", "Nişantaşı Flagship")
            .with("country", "Turkey")
            .with("total_revenue_30d", 182000.0)
            .with("franchise_flag", "owned"),
        Row::new()
            .with("store_id", "SV002")
            .with("store_name", "Bağdat Caddesi")
            .with("country", "Turkey")
            .with("total_revenue_30d", 141500.0)
            .with("franchise_flag", "franchise"),
    ]
}

#[tokio::test]
async fn health_reports_engines_and_executor() {
    let app = app(Arc::new(InMemoryExecutor::with_rows(vec![])));
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(
        body["engines"],
        serde_json::json!(["formal-wear", "franchise-ops", "store-performance", "inventory"])
    );
    assert_eq!(body["executor"]["name"], "in-memory");
    assert_eq!(body["executor"]["ready"], true);
}

#[tokio::test]
async fn store_comparison_round_trip() {
    let executor = Arc::new(InMemoryExecutor::with_rows(comparison_rows()));
    let (status, body) = post(
        app(executor.clone()),
        "/store-performance/query",
        r#"{"question": "compare store revenue between SV001 and SV002"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["engine"], "store_performance");
    assert_eq!(body["query_type"], "store_comparison");
    assert_eq!(body["row_count"], 2);
    assert_eq!(body["summary"]["total_records"], 2);
    assert_eq!(body["rows"][0]["store_id"], "SV001");
    assert_eq!(
        body["query_interpretation"]["detected_entities"]["store"],
        serde_json::json!(["sv001", "sv002"])
    );
    assert_eq!(body["parameters"]["store_id"], "SV001");
    assert_eq!(body["parameters"]["template"], "store_performance/store_comparison");
    assert!(body["insights"].as_array().unwrap().len() <= 16);

    let request = executor.last_request();
    assert_eq!(request.template_id, "store_performance/store_comparison");
    assert_eq!(request.param("store_id"), Some(&ParamValue::Text("SV001".into())));
}

#[tokio::test]
async fn malformed_json_is_treated_as_empty_body() {
    let executor = Arc::new(InMemoryExecutor::with_rows(vec![]));
    let (status, body) = post(app(executor.clone()), "/formal-wear/query", "{question:").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["query_type"], "suit_sales");
    assert_eq!(body["confidence_score"], 0.0);
    assert_eq!(body["row_count"], 0);
    assert_eq!(
        body["insights"],
        serde_json::json!(["📊 KEY FINDINGS", "No data found matching the specified criteria"])
    );
    assert_eq!(body["executive_summary"], "");
    assert_eq!(executor.last_request().param("limit"), Some(&ParamValue::Integer(100)));
}

#[tokio::test]
async fn override_and_limit_are_applied() {
    let executor = Arc::new(InMemoryExecutor::with_rows(vec![]));
    let (status, body) = post(
        app(executor.clone()),
        "/franchise-ops/query",
        r#"{"question": "partner scores", "query_type": "support_tickets", "limit": 10000}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["query_type"], "support_tickets");
    assert_eq!(body["confidence_score"], 1.0);
    assert_eq!(body["parameters"]["limit"], 500);
    assert_eq!(
        executor.last_request().template_id,
        "franchise_ops/support_tickets"
    );
}

#[tokio::test]
async fn foreign_override_is_ignored() {
    let executor = Arc::new(InMemoryExecutor::with_rows(vec![]));
    let (_, body) = post(
        app(executor),
        "/formal-wear/query",
        r#"{"question": "size returns", "query_type": "kpi_tracking"}"#,
    )
    .await;
    assert_eq!(body["query_type"], "size_analysis");
}

#[tokio::test]
async fn wrongly_typed_field_is_a_bad_request() {
    let executor = Arc::new(InMemoryExecutor::with_rows(vec![]));
    let (status, body) = post(app(executor.clone()), "/store-performance/query", r#"{"limit": "lots"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error_type"], "InvalidRequest");
    assert_eq!(body["engine"], "store_performance");
    assert!(executor.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn executor_failure_is_a_500_envelope() {
    let executor = Arc::new(InMemoryExecutor::failing("QueryFailed", "SYNTAX_ERROR: line 3:1"));
    let (status, body) = post(
        app(executor),
        "/formal-wear/query",
        r#"{"question": "bundle indirim kampanya"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["error_type"], "QueryFailed");
    assert_eq!(body["error"], "QueryFailed: SYNTAX_ERROR: line 3:1");
    assert_eq!(body["query_type"], "bundle_analysis");
    assert_eq!(
        body["suggestion"],
        "Please check your query syntax or try a different question"
    );
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn docs_are_served() {
    let app = app(Arc::new(InMemoryExecutor::with_rows(vec![])));
    let request = Request::builder().uri("/docs").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn threshold_overrides_reach_the_executor() {
    let thresholds = ThresholdConfig::from_yaml("formal_wear:\n  alteration_rate_critical: 20\n").unwrap();
    let executor = Arc::new(InMemoryExecutor::with_rows(vec![]));
    let app = build_router(state_with(executor.clone(), thresholds), &server_config());
    let (status, _) = post(app, "/formal-wear/query", r#"{"question": "suit sales"}"#).await;

    assert_eq!(status, StatusCode::OK);
    let request = executor.last_request();
    assert_eq!(request.param("alteration_rate_critical"), Some(&ParamValue::Float(20.0)));
    assert_eq!(request.param("alteration_rate_target"), Some(&ParamValue::Float(15.0)));
}

#[tokio::test]
async fn inventory_allocation_splits_the_requested_quantity() {
    let rows = vec![
        Row::new()
            .with("store_id", "VKK001")
            .with("store_name", "Vakko Nişantaşı")
            .with("allocation_score", 60.0)
            .with("avg_daily_sales_30d", 12.0)
            .with("requested_qty", 500),
        Row::new()
            .with("store_id", "VKK002")
            .with("store_name", "Vakko Ankara")
            .with("allocation_score", 40.0)
            .with("avg_daily_sales_30d", 6.0)
            .with("requested_qty", 500),
    ];
    let executor = Arc::new(InMemoryExecutor::with_rows(rows));
    let (status, body) = post(
        app(executor.clone()),
        "/inventory/query",
        r#"{"question": "merkez depodan mağazalara dağıtım", "query_type": "allocation", "quantity": 500, "sku": "vk-kbn-01"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["engine"], "inventory");
    assert_eq!(body["query_type"], "allocation");
    assert_eq!(body["parameters"]["quantity"], 500);
    assert_eq!(body["rows"][0]["ai_recommended_qty"], 300);
    assert_eq!(body["rows"][1]["erp_suggested_qty"], 250);
    assert_eq!(body["metrics_summary"]["total_ai_allocation"], 500.0);

    let request = executor.last_request();
    assert_eq!(request.template_id, "inventory/allocation");
    assert_eq!(request.param("quantity"), Some(&ParamValue::Integer(500)));
    assert_eq!(request.param("sku"), Some(&ParamValue::Text("VK-KBN-01".into())));
    assert_eq!(request.param("target_supply_days"), Some(&ParamValue::Float(14.0)));
}
