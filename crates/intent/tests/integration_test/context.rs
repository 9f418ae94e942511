//! QueryContext building with and without overrides.

use atelier_intent::*;

#[test]
fn full_context_for_a_turkish_question() {
    let r = Registry::builtin(Engine::FormalWear).unwrap();
    let ctx = QueryContext::build(&r, "Türkiye'de kış sezonu talep trendleri", None);

    assert_eq!(ctx.engine, Engine::FormalWear);
    assert_eq!(ctx.detected_category, Category::SeasonalTrends);
    assert_eq!(ctx.detected_language, Language::Turkish);
    assert_eq!(ctx.entities.first(EntityKind::Country), Some("türkiye"));
    assert_eq!(ctx.entities.first(EntityKind::Season), Some("kış"));
    assert!(ctx.suggested_followups.len() <= MAX_FOLLOWUPS);
    assert!((0.0..=1.0).contains(&ctx.confidence));
}

#[test]
fn cross_engine_override_is_ignored() {
    let r = Registry::builtin(Engine::StorePerformance).unwrap();
    let ctx = QueryContext::build(&r, "weekend footfall", Some("bundle_analysis"));
    assert!(!ctx.overridden);
    assert_ne!(ctx.detected_category, Category::BundleAnalysis);
    assert_eq!(ctx.detected_category.engine(), Engine::StorePerformance);
}

#[test]
fn context_serializes_with_snake_case_ids() {
    let r = Registry::builtin(Engine::StorePerformance).unwrap();
    let ctx = QueryContext::build(&r, "hourly peak pattern", None);
    let json = serde_json::to_value(&ctx).unwrap();
    assert_eq!(json["detected_category"], "hourly_patterns");
    assert_eq!(json["engine"], "store_performance");
    assert_eq!(json["detected_language"], "en");
}
