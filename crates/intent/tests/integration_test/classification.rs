//! Classification and extraction across every engine.

use atelier_intent::*;

fn registry(engine: Engine) -> Registry {
    Registry::builtin(engine).expect("builtin registry")
}

#[test]
fn comparison_question_on_formal_wear() {
    let r = registry(Engine::FormalWear);
    let text = "compare store revenue between SV001 and SV002";
    let c = classify(text, r.patterns());
    assert_eq!(c.category, Category::CrossAnalysis);
    assert_eq!(c.score, 2);

    let entities = extract(text, r.entities());
    assert_eq!(
        entities.get(EntityKind::Store),
        Some(&EntityValue::Many(vec!["sv001".into(), "sv002".into()]))
    );
}

#[test]
fn comparison_question_on_store_performance() {
    let r = registry(Engine::StorePerformance);
    let text = "compare store revenue between SV001 and SV002";
    let c = classify(text, r.patterns());
    assert_eq!(c.category, Category::StoreComparison);

    let stores = extract(text, r.entities());
    assert_eq!(stores.get(EntityKind::Store).map(|v| v.values()), Some(vec!["sv001", "sv002"]));
}

#[test]
fn franchise_questions() {
    let r = registry(Engine::FranchiseOps);
    assert_eq!(
        classify("Destek talepleri ve teknik sorun çözüm süresi", r.patterns()).category,
        Category::SupportTickets
    );
    assert_eq!(
        classify("expansion opportunity and investment roi", r.patterns()).category,
        Category::ExpansionAnalysis
    );
    assert_eq!(classify("", r.patterns()).category, Category::PartnerPerformance);
}

#[test]
fn inventory_questions() {
    let r = registry(Engine::Inventory);
    let cases = [
        ("Hangi mağaza stokları 5 günden önce bitecek?", Category::StockReplenishment, 1),
        ("1000 adet kaban için merkez depodan mağazalara dağıtım", Category::Allocation, 2),
        ("Soğuk havada mont talep tahmini", Category::DemandForecast, 3),
        ("Mağazalar arası transfer önerileri", Category::StockTransfer, 2),
        ("Ölü stok ve stok devir hızı optimizasyonu", Category::InventoryOptimization, 3),
        ("Kritik stok uyarıları", Category::StockAlerts, 2),
        ("Which items run out of stock in the worst case?", Category::StockoutPrediction, 2),
    ];
    for (text, category, score) in cases {
        let c = classify(text, r.patterns());
        assert_eq!((c.category, c.score), (category, score), "{text}");
    }
}

#[test]
fn empty_text_defaults_on_every_engine() {
    for engine in Engine::ALL {
        let c = classify("", registry(engine).patterns());
        assert_eq!(c.category, engine.default_category());
        assert_eq!(c.confidence, 0.0);
    }
}

#[test]
fn extractor_never_emits_empty_lists() {
    let r = registry(Engine::FormalWear);
    for text in ["", "nothing to see", "sv001", "48 50 52 beden", "yüzde 20 indirim 1500 tl"] {
        for (_, value) in extract(text, r.entities()).iter() {
            match value {
                EntityValue::Single(s) => assert!(!s.is_empty()),
                EntityValue::Many(v) => assert!(v.len() >= 2, "{text}: {v:?}"),
            }
        }
    }
}

#[test]
fn turkish_percentage_and_amount() {
    let r = registry(Engine::FormalWear);
    let e = extract("yüzde 20 indirim 1500 tl", r.entities());
    assert_eq!(e.first(EntityKind::Percentage), Some("yüzde 20"));
    assert_eq!(
        e.get(EntityKind::Amount),
        Some(&EntityValue::Many(vec!["20".into(), "1500 tl".into()]))
    );
}
