use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "atelier API",
        version = "0.1.0",
        description = "Retail analytics questions answered from warehouse reports with rule-based insights.",
    ),
    tags(
        (name = "Health", description = "Server and executor readiness"),
        (name = "Engines", description = "Per-engine question endpoints"),
    ),
    paths(
        crate::api::health::health,
        crate::api::query::formal_wear_query,
        crate::api::query::franchise_ops_query,
        crate::api::query::store_performance_query,
        crate::api::query::inventory_query,
    ),
    components(schemas(
        crate::api::health::HealthResponse,
        crate::api::health::ExecutorStatus,
        crate::api::query::QueryBody,
        crate::api::query::QueryParameters,
        crate::api::query::QuerySummary,
        crate::api::query::QuerySuccess,
        crate::api::query::QueryFailure,
    ))
)]
pub struct ApiDoc;
