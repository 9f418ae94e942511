use atelier_athena::{bind, TemplateCatalog};
use atelier_insight::ThresholdConfig;
use atelier_intent::{Engine, QueryContext, Registry};
use atelier_server::planner::{plan, PlanInput};

use crate::{engine_config, queries_dir};

#[test]
fn every_category_plans_onto_a_bindable_template() {
    let catalog = TemplateCatalog::load(&queries_dir()).unwrap();
    for engine in Engine::ALL {
        let registry = Registry::builtin(engine).unwrap();
        for category in engine.categories() {
            let ctx = QueryContext::build(&registry, "", Some(category.as_str()));
            let plan = plan(&ctx, &PlanInput::default(), &engine_config(), &ThresholdConfig::default());
            let sql = catalog
                .get(&plan.request.template_id)
                .unwrap_or_else(|e| panic!("{category}: {e}"));
            let bound = bind(sql, &plan.request).unwrap_or_else(|e| panic!("{category}: {e}"));
            assert!(bound.names.iter().any(|n| n == "limit"), "{category}");
            assert_eq!(bound.parameters.len(), bound.sql.matches('?').count(), "{category}");
        }
    }
}

#[test]
fn entity_text_never_reaches_sql() {
    let catalog = TemplateCatalog::load(&queries_dir()).unwrap();
    let registry = Registry::builtin(Engine::StorePerformance).unwrap();
    let ctx = QueryContext::build(&registry, "karşılaştır mağaza", None);
    let input = PlanInput {
        store_id: Some("sv001'; drop table sales; --".into()),
        ..Default::default()
    };
    let plan = plan(&ctx, &input, &engine_config(), &ThresholdConfig::default());
    let sql = catalog.get(&plan.request.template_id).unwrap();
    let bound = bind(sql, &plan.request).unwrap();
    assert!(!bound.sql.to_lowercase().contains("drop table"));
    assert!(bound
        .parameters
        .iter()
        .any(|p| p == "'SV001''; DROP TABLE SALES; --'"));
}
