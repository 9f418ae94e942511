//! Shared, read-only application state.

use std::sync::Arc;

use atelier_core::config::EngineConfig;
use atelier_core::QueryExecutor;
use atelier_insight::ThresholdConfig;
use atelier_intent::{Engine, PatternError, Registry};

/// Compiled pattern registries, one per engine.
#[derive(Debug, Clone)]
pub struct Registries {
    formal_wear: Registry,
    franchise_ops: Registry,
    store_performance: Registry,
    inventory: Registry,
}

impl Registries {
    pub fn builtin() -> Result<Self, PatternError> {
        Ok(Self {
            formal_wear: Registry::builtin(Engine::FormalWear)?,
            franchise_ops: Registry::builtin(Engine::FranchiseOps)?,
            store_performance: Registry::builtin(Engine::StorePerformance)?,
            inventory: Registry::builtin(Engine::Inventory)?,
        })
    }

    pub fn get(&self, engine: Engine) -> &Registry {
        match engine {
            Engine::FormalWear => &self.formal_wear,
            Engine::FranchiseOps => &self.franchise_ops,
            Engine::StorePerformance => &self.store_performance,
            Engine::Inventory => &self.inventory,
        }
    }
}

/// Everything a request handler reads. Built once at startup, never mutated.
pub struct AppState {
    pub executor: Arc<dyn QueryExecutor>,
    pub registries: Registries,
    pub thresholds: ThresholdConfig,
    pub engine: EngineConfig,
}

impl AppState {
    pub fn new(
        executor: Arc<dyn QueryExecutor>,
        thresholds: ThresholdConfig,
        engine: EngineConfig,
    ) -> Result<Self, PatternError> {
        Ok(Self {
            executor,
            registries: Registries::builtin()?,
            thresholds,
            engine,
        })
    }

    pub fn registry(&self, engine: Engine) -> &Registry {
        self.registries.get(engine)
    }
}
