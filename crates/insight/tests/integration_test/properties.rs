//! Properties that hold for every category: list caps, determinism and
//! verbatim formatting.

use atelier_core::Row;
use atelier_insight::*;
use atelier_intent::Engine;

use crate::common::{context, kitchen_sink};

fn sink_rows(n: usize) -> Vec<Row> {
    (0..n).map(kitchen_sink).collect()
}

#[test]
fn every_category_respects_list_caps() {
    let rows = sink_rows(30);
    let thresholds = ThresholdConfig::default();
    for engine in Engine::ALL {
        for category in engine.categories() {
            let ctx = context(engine, "sv001 turkey wedding", Some(category.as_str()));
            let out = analyze(&rows, *category, &ctx, &thresholds);
            assert!(out.insights.len() <= 15, "{category}: {} insights", out.insights.len());
            assert!(out.recommendations.len() <= 8, "{category}");
            assert!(out.alerts.len() <= 5, "{category}");
            assert!(!out.insights.is_empty(), "{category} produced nothing");
            if engine != Engine::FormalWear {
                assert!(out.recommendations.len() <= 5, "{category}");
            }
        }
    }
}

#[test]
fn kitchen_sink_rows_never_fail_a_rule() {
    let rows = sink_rows(12);
    for engine in Engine::ALL {
        for category in engine.categories() {
            let ctx = context(engine, "", Some(category.as_str()));
            let out = analyze(&rows, *category, &ctx, &ThresholdConfig::default());
            assert!(
                !out.alerts
                    .iter()
                    .any(|a| a.starts_with("Analysis partially completed") || a.starts_with("Analiz kısmen tamamlandı")),
                "{category}: {:?}",
                out.alerts
            );
        }
    }
}

#[test]
fn analysis_is_deterministic() {
    let rows = sink_rows(15);
    let ctx = context(Engine::StorePerformance, "mağaza karşılaştır", None);
    let first = analyze(&rows, ctx.detected_category, &ctx, &ThresholdConfig::default());
    let second = analyze(&rows, ctx.detected_category, &ctx, &ThresholdConfig::default());
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn formatter_keeps_strings_verbatim() {
    let rows = sink_rows(20);
    for engine in Engine::ALL {
        let category = engine.default_category();
        let ctx = context(engine, "", Some(category.as_str()));
        let out = analyze(&rows, category, &ctx, &ThresholdConfig::default());
        let report = format(&out, &ctx);

        let body = |block: &[String]| block.iter().skip(1).cloned().collect::<Vec<_>>();
        assert_eq!(body(&report.insights), out.insights);
        assert_eq!(body(&report.alerts), out.alerts);

        let stripped: Vec<String> = body(&report.recommendations)
            .iter()
            .map(|r| r.split_once(' ').map(|(_, rest)| rest.to_string()).unwrap_or_default())
            .collect();
        assert_eq!(stripped, out.recommendations);
        assert_eq!(report.suggested_queries, ctx.suggested_followups);
        assert_eq!(report.metrics_summary, out.metrics_summary);
    }
}

#[test]
fn merged_metrics_keep_rule_order() {
    let rows = sink_rows(10);
    let ctx = context(Engine::FormalWear, "", Some("suit_sales"));
    let out = analyze(&rows, ctx.detected_category, &ctx, &ThresholdConfig::default());
    let names: Vec<&str> = out.metrics_summary.keys().map(String::as_str).collect();
    assert_eq!(
        &names[..6],
        &[
            "total_revenue",
            "total_units",
            "average_margin",
            "star_performers",
            "fit_issues",
            "countries_analyzed",
        ]
    );
}
