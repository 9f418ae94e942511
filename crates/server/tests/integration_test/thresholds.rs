//! A threshold override flows from YAML through the plan and bound SQL into
//! the tier labels the rules read.

use atelier_athena::{bind, TemplateCatalog};
use atelier_core::{ParamValue, QueryRequest, Row};
use atelier_insight::{analyze, ThresholdConfig};
use atelier_intent::{Category, Engine, QueryContext, Registry};
use atelier_server::planner::{plan, PlanInput};

use crate::{engine_config, queries_dir};

fn float_param(request: &QueryRequest, name: &str) -> f64 {
    match request.param(name) {
        Some(ParamValue::Float(v)) => *v,
        other => panic!("{name}: {other:?}"),
    }
}

/// The `fit_quality` CASE of `formal_wear/suit_sales`, evaluated with the
/// values the request binds.
fn fit_quality(alteration_rate: f64, request: &QueryRequest) -> &'static str {
    if alteration_rate <= float_param(request, "alteration_rate_excellent") {
        "🏆 Perfect Fit"
    } else if alteration_rate <= float_param(request, "alteration_rate_target") {
        "✅ Good Fit"
    } else if alteration_rate <= float_param(request, "alteration_rate_critical") {
        "⚠️ Fit Issues"
    } else {
        "🔴 Critical Fit Problem"
    }
}

fn suit_row(request: &QueryRequest) -> Row {
    Row::new()
        .with("store_id", "SV004")
        .with("country", "Germany")
        .with("suit_type", "Business")
        .with("gross_revenue", 48_000.0)
        .with("units_sold", 60)
        .with("alteration_rate", 22.0)
        .with("fit_quality", fit_quality(22.0, request))
}

#[test]
fn alteration_override_changes_params_sql_tier_and_alert() {
    let registry = Registry::builtin(Engine::FormalWear).unwrap();
    let ctx = QueryContext::build(&registry, "suit sales", Some("suit_sales"));
    let defaults = ThresholdConfig::default();
    let stricter = ThresholdConfig::from_yaml("formal_wear:\n  alteration_rate_critical: 20\n").unwrap();

    let default_plan = plan(&ctx, &PlanInput::default(), &engine_config(), &defaults);
    let strict_plan = plan(&ctx, &PlanInput::default(), &engine_config(), &stricter);
    assert_eq!(float_param(&default_plan.request, "alteration_rate_critical"), 25.0);
    assert_eq!(float_param(&strict_plan.request, "alteration_rate_critical"), 20.0);

    let catalog = TemplateCatalog::load(&queries_dir()).unwrap();
    let sql = catalog.get("formal_wear/suit_sales").unwrap();
    assert!(!sql.contains("alteration_rate <= 25"));
    let bound = bind(sql, &strict_plan.request).unwrap();
    let critical: Vec<&String> = bound
        .names
        .iter()
        .zip(&bound.parameters)
        .filter(|(name, _)| *name == "alteration_rate_critical")
        .map(|(_, literal)| literal)
        .collect();
    assert_eq!(critical, vec!["20"]);

    assert_eq!(fit_quality(22.0, &default_plan.request), "⚠️ Fit Issues");
    assert_eq!(fit_quality(22.0, &strict_plan.request), "🔴 Critical Fit Problem");

    let lenient = analyze(&[suit_row(&default_plan.request)], Category::SuitSales, &ctx, &defaults);
    let strict = analyze(&[suit_row(&strict_plan.request)], Category::SuitSales, &ctx, &stricter);

    let critical_alert = "🔴 1 of 1 rows exceed critical alteration rate (>20.0%)";
    assert!(strict.alerts.iter().any(|a| a == critical_alert), "{:?}", strict.alerts);
    assert!(strict.alerts.iter().any(|a| a == "🔴 Critical fit issues in: Business"));
    assert!(!lenient.alerts.iter().any(|a| a.contains("critical alteration rate")));
    assert!(!lenient.alerts.iter().any(|a| a.starts_with("🔴 Critical fit issues")));
}

#[test]
fn inventory_cutoffs_bind_into_every_inventory_template() {
    let catalog = TemplateCatalog::load(&queries_dir()).unwrap();
    let registry = Registry::builtin(Engine::Inventory).unwrap();
    let thresholds = ThresholdConfig::from_yaml("inventory:\n  watch_days: 10\n").unwrap();
    let ctx = QueryContext::build(&registry, "", Some("stock_replenishment"));
    let plan = plan(&ctx, &PlanInput::default(), &engine_config(), &thresholds);
    let bound = bind(catalog.get(&plan.request.template_id).unwrap(), &plan.request).unwrap();
    let watch: Vec<&String> = bound
        .names
        .iter()
        .zip(&bound.parameters)
        .filter(|(name, _)| *name == "watch_days")
        .map(|(_, literal)| literal)
        .collect();
    assert!(!watch.is_empty());
    assert!(watch.iter().all(|literal| *literal == "10"));
}
