use atelier_athena::{bind, TemplateCatalog};
use atelier_core::{ParamValue, QueryRequest};
use atelier_insight::ThresholdConfig;
use atelier_intent::Engine;
use chrono::NaiveDate;

use crate::queries_dir;

/// Everything the planner binds, with default thresholds for every engine.
fn full_request(template_id: &str, store_id: &str) -> QueryRequest {
    let day = |d| ParamValue::Date(NaiveDate::from_ymd_opt(2024, 12, d).unwrap());
    let mut request = QueryRequest::new(template_id)
        .with("limit", ParamValue::Integer(100))
        .with("start_date", day(9))
        .with("end_date", day(15))
        .with("country", ParamValue::Text("Turkey".into()))
        .with("store_id", ParamValue::Text(store_id.into()))
        .with("suit_type", ParamValue::Null)
        .with("season", ParamValue::Null)
        .with("size", ParamValue::Null)
        .with("quantity", ParamValue::Integer(1000))
        .with("sku", ParamValue::Null);
    let thresholds = ThresholdConfig::default();
    for engine in Engine::ALL {
        for (name, value) in thresholds.sql_parameters(engine) {
            request = request.with(name, ParamValue::Float(value));
        }
    }
    request
}

#[test]
fn every_repository_template_binds_with_the_planner_parameters() {
    let catalog = TemplateCatalog::load(&queries_dir()).unwrap();
    for id in catalog.ids() {
        let sql = catalog.get(id).unwrap();
        let bound = bind(sql, &full_request(id, "SV001"))
            .unwrap_or_else(|e| panic!("{id}: {e}"));

        assert!(!bound.parameters.is_empty(), "{id} binds nothing");
        assert_eq!(bound.parameters.len(), bound.sql.matches('?').count(), "{id}");
        assert!(bound.names.iter().any(|n| n == "limit"), "{id} has no LIMIT");
    }
}

#[test]
fn entity_text_never_reaches_the_statement() {
    let catalog = TemplateCatalog::load(&queries_dir()).unwrap();
    let hostile = "SV001' OR '1'='1";
    let sql = catalog.get("store_performance/daily_performance").unwrap();

    let bound = bind(sql, &full_request("store_performance/daily_performance", hostile)).unwrap();
    assert!(!bound.sql.contains(hostile));
    assert!(!bound.sql.contains("Turkey"));
    assert!(bound
        .parameters
        .contains(&"'SV001'' OR ''1''=''1'".to_string()));
}
