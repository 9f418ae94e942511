//! Startup: load templates and thresholds, connect the executor, build state.

use std::sync::Arc;

use anyhow::Context;
use atelier_athena::{AthenaConfig, AthenaExecutor, TemplateCatalog};
use atelier_core::Config;
use atelier_insight::ThresholdConfig;
use tracing::info;

use crate::state::AppState;

/// Everything fallible happens here, before the listener binds. A disabled or
/// misconfigured warehouse is not fatal: the executor reports itself unready.
pub async fn build_state(config: &Config) -> anyhow::Result<AppState> {
    let thresholds = ThresholdConfig::load(config.engine.thresholds_path.as_deref())
        .context("failed to load threshold overrides")?;

    let catalog = TemplateCatalog::load(&config.engine.templates_dir)
        .context("failed to load SQL templates")?;

    let athena = AthenaConfig::from_env_profiled(&config.profile);
    info!(athena = %athena.redacted_summary(), "Athena configuration");
    let executor = AthenaExecutor::connect(athena, Arc::new(catalog)).await;

    AppState::new(Arc::new(executor), thresholds, config.engine.clone())
        .context("failed to compile intent patterns")
}
