//! End-to-end analyzer behaviour on small hand-built row sets.

use atelier_core::Row;
use atelier_insight::*;
use atelier_intent::{Category, Engine};

use crate::common::context;

#[test]
fn no_rows_gives_no_data_message() {
    let ctx = context(Engine::FormalWear, "show suit sales in germany", None);
    let out = analyze(&[], Category::SuitSales, &ctx, &ThresholdConfig::default());
    assert_eq!(out.insights, vec!["No data found matching the specified criteria"]);
    assert_eq!(out.recommendations, vec!["Try broadening the date range"]);
    assert!(out.alerts.is_empty());
    assert!(out.metrics_summary.is_empty());
}

#[test]
fn three_of_ten_rows_over_critical_alteration() {
    let rows: Vec<Row> = (0..10)
        .map(|i| {
            Row::new()
                .with("store_id", format!("SV{:03}", i + 1))
                .with("suit_type", "Business")
                .with("country", "Turkey")
                .with("gross_revenue", 10_000.0)
                .with("units_sold", 20)
                .with("avg_margin_pct", 60.0)
                .with("alteration_rate", if i < 3 { 31.5 } else { 12.0 })
        })
        .collect();
    let ctx = context(Engine::FormalWear, "suit sales", Some("suit_sales"));
    let out = analyze(&rows, Category::SuitSales, &ctx, &ThresholdConfig::default());

    assert_eq!(out.alerts, vec!["🔴 3 of 10 rows exceed critical alteration rate (>25.0%)"]);
    assert!(out
        .recommendations
        .iter()
        .any(|r| r == "Review sizing standards for Turkey market"));
    assert_eq!(out.metrics_summary["total_revenue"], 100_000.0);
    assert_eq!(out.metrics_summary["countries_analyzed"], 1.0);
}

#[test]
fn thresholds_change_outcome() {
    let rows: Vec<Row> = (0..4)
        .map(|_| Row::new().with("store_id", "SV001").with("alteration_rate", 27.0))
        .collect();
    let ctx = context(Engine::FormalWear, "", Some("suit_sales"));

    let out = analyze(&rows, Category::SuitSales, &ctx, &ThresholdConfig::default());
    assert_eq!(out.alerts.len(), 1);

    let relaxed = ThresholdConfig::from_yaml("formal_wear:\n  alteration_rate_critical: 30.0\n").unwrap();
    let out = analyze(&rows, Category::SuitSales, &ctx, &relaxed);
    assert!(out.alerts.is_empty());
}

#[test]
fn failing_rule_keeps_findings_before_and_after() {
    let rows = vec![
        Row::new()
            .with("demand_status", "🌟 Perfect Match")
            .with("size", "50")
            .with("fit_type", "Regular")
            .with("size_quality_score", 92.5),
        Row::new()
            .with("fit_assessment", "🔴 Critical Fit Issues")
            .with("size", "58")
            .with("return_risk", "🔴 High Return Risk")
            .with("total_returns", 14),
    ];
    let ctx = context(Engine::FormalWear, "size fit problems", Some("size_analysis"));
    let out = analyze(&rows, Category::SizeAnalysis, &ctx, &ThresholdConfig::default());

    assert_eq!(
        &out.insights[..2],
        &["🌟 Perfect size matches found:", "  • Size 50 Regular (Score: 92.5)"]
    );
    assert_eq!(out.alerts[0], "🔴 High return risk: 14 returns from problematic sizes");
    let soft: Vec<&String> = out
        .alerts
        .iter()
        .filter(|a| a.starts_with("Analysis partially completed"))
        .collect();
    assert_eq!(soft.len(), 1);
    assert_eq!(
        out.alerts.last().map(String::as_str),
        Some("Analysis partially completed: critical_fit_sizes: missing field 'fit_type'")
    );
    assert_eq!(out.metrics_summary["high_return_risk"], 1.0);
}

#[test]
fn low_confidence_suppresses_executive_summary() {
    let rows = vec![Row::new().with("gross_revenue", 5000.0).with("units_sold", 3)];
    let ctx = context(Engine::FormalWear, "anomaly", None);
    assert!(ctx.confidence < 0.7);

    let out = analyze(&rows, ctx.detected_category, &ctx, &ThresholdConfig::default());
    assert!(!out.metrics_summary.is_empty());
    assert_eq!(format(&out, &ctx).executive_summary, "");
}

#[test]
fn entity_focus_reports_matching_rows() {
    let rows = vec![
        Row::new().with("country", "Turkey").with("gross_revenue", 1.0),
        Row::new().with("country", "Germany").with("gross_revenue", 1.0),
    ];
    let ctx = context(Engine::FormalWear, "suit sales in türkiye", Some("suit_sales"));
    let out = analyze(&rows, Category::SuitSales, &ctx, &ThresholdConfig::default());
    assert!(out.insights.contains(&"🔎 1 of 2 rows match country Turkey".to_string()));
}
