use std::fs;

use atelier_athena::{TemplateCatalog, TemplateError};

use crate::queries_dir;

#[test]
fn repository_catalog_has_every_report() {
    let catalog = TemplateCatalog::load(&queries_dir()).expect("load queries/");
    let ids: Vec<&str> = catalog.ids().collect();

    for id in [
        "formal_wear/suit_sales",
        "formal_wear/bundle_analysis",
        "formal_wear/size_analysis",
        "formal_wear/seasonal_trends",
        "formal_wear/cross_analysis",
        "franchise_ops/partner_performance",
        "franchise_ops/store_network",
        "franchise_ops/expansion_analysis",
        "franchise_ops/support_tickets",
        "store_performance/daily_performance",
        "store_performance/store_comparison",
        "store_performance/staff_analysis",
        "store_performance/traffic_conversion",
        "store_performance/kpi_tracking",
        "inventory/stock_replenishment",
        "inventory/stockout_prediction",
        "inventory/demand_forecast",
        "inventory/inventory_optimization",
        "inventory/stock_alerts",
        "inventory/allocation",
        "inventory/stock_transfer",
    ] {
        assert!(ids.contains(&id), "missing template {id}");
    }
    assert_eq!(catalog.len(), 21);
}

#[test]
fn nested_dirs_and_non_sql_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("store_performance")).unwrap();
    fs::write(dir.path().join("store_performance/daily.sql"), "SELECT 1").unwrap();
    fs::write(dir.path().join("store_performance/notes.md"), "# not sql").unwrap();
    fs::write(dir.path().join("ping.sql"), "SELECT 'pong'").unwrap();

    let catalog = TemplateCatalog::load(dir.path()).unwrap();
    assert_eq!(catalog.ids().collect::<Vec<_>>(), vec!["ping", "store_performance/daily"]);
    assert!(catalog.contains("ping"));
    assert_eq!(catalog.get("store_performance/daily").unwrap(), "SELECT 1");
}

#[test]
fn empty_template_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("formal_wear")).unwrap();
    fs::write(dir.path().join("formal_wear/blank.sql"), "  \n").unwrap();

    match TemplateCatalog::load(dir.path()) {
        Err(TemplateError::Empty(id)) => assert_eq!(id, "formal_wear/blank"),
        other => panic!("expected Empty, got {other:?}"),
    }
}

#[test]
fn missing_dir_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = TemplateCatalog::load(&dir.path().join("nope")).unwrap_err();
    assert!(matches!(err, TemplateError::MissingDir(_)));
}
