//! Business thresholds used by the analysis rules.
//!
//! Defaults reproduce the production constants. A YAML file may override any
//! subset of them; unknown keys are rejected so typos surface at startup.
//!
//! Tier cutoffs live in the report templates as `:name` parameters and are
//! bound from [`ThresholdConfig::sql_parameters`]; the rest are read by rules.

use std::fs;
use std::path::{Path, PathBuf};

use atelier_intent::Engine;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum ThresholdError {
    /// The override file could not be read.
    #[error("failed to read thresholds from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The override file is not a valid threshold document.
    #[error("invalid thresholds document: {0}")]
    Parse(#[from] serde_yaml::Error),
}

// ── Top level ───────────────────────────────────────────────────────

/// All thresholds, one section per engine. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThresholdConfig {
    pub formal_wear: FormalWearThresholds,
    pub franchise: FranchiseThresholds,
    pub store: StoreThresholds,
    pub inventory: InventoryThresholds,
}

impl ThresholdConfig {
    /// Parse a (possibly partial) YAML document over the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, ThresholdError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ThresholdError> {
        let contents = fs::read_to_string(path).map_err(|source| ThresholdError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&contents)?;
        info!(path = %path.display(), "loaded threshold overrides");
        Ok(config)
    }

    /// Defaults, overridden by `path` when given.
    pub fn load(path: Option<&Path>) -> Result<Self, ThresholdError> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    /// Cutoffs referenced by `engine`'s report templates, keyed by the
    /// placeholder name each template uses.
    pub fn sql_parameters(&self, engine: Engine) -> Vec<(&'static str, f64)> {
        match engine {
            Engine::FormalWear => {
                let t = &self.formal_wear;
                vec![
                    ("alteration_rate_excellent", t.alteration_rate_excellent),
                    ("alteration_rate_target", t.alteration_rate_target),
                    ("alteration_rate_critical", t.alteration_rate_critical),
                    ("return_rate_excellent", t.return_rate_excellent),
                    ("return_rate_threshold", t.return_rate_threshold),
                    ("return_rate_critical", t.return_rate_critical),
                    ("satisfaction_excellent", t.satisfaction_excellent),
                    ("satisfaction_target", t.satisfaction_target),
                    ("satisfaction_minimum", t.satisfaction_minimum),
                    ("margin_target", t.margin_target),
                    ("margin_minimum", t.margin_minimum),
                    ("bundle_attach_target", t.bundle_attach_target),
                    ("demand_index_exceptional", t.demand_index_exceptional),
                    ("demand_index_high", t.demand_index_high),
                    ("demand_index_good", t.demand_index_good),
                    ("demand_index_low", t.demand_index_low),
                ]
            }
            Engine::FranchiseOps => {
                let t = &self.franchise;
                vec![
                    ("performance_score_excellent", t.performance_score_excellent),
                    ("revenue_achievement_target", t.revenue_achievement_target),
                    ("critical_issue_threshold", t.critical_issue_threshold),
                    ("compliance_score_target", t.compliance_score_target),
                    ("feasibility_high", t.feasibility_high),
                    ("roi_excellent", t.roi_excellent),
                    ("support_resolution_target", t.support_resolution_target),
                    ("ticket_resolution_excellent", t.ticket_resolution_excellent),
                ]
            }
            Engine::StorePerformance => {
                let t = &self.store;
                vec![
                    ("conversion_excellent", t.conversion_excellent),
                    ("conversion_good", t.conversion_good),
                    ("conversion_poor", t.conversion_poor),
                    ("training_score_minimum", t.training_score_minimum),
                    ("kpi_achievement_excellent", t.kpi_achievement_excellent),
                    ("kpi_achievement_good", t.kpi_achievement_good),
                    ("kpi_achievement_poor", t.kpi_achievement_poor),
                ]
            }
            Engine::Inventory => {
                let t = &self.inventory;
                vec![
                    ("imminent_days", t.imminent_days),
                    ("very_critical_days", t.very_critical_days),
                    ("critical_days", t.critical_days),
                    ("warning_days", t.warning_days),
                    ("watch_days", t.watch_days),
                    ("target_supply_days", t.target_supply_days),
                    ("excess_supply_days", t.excess_supply_days),
                    ("transfer_min_qty", t.transfer_min_qty),
                    ("dead_stock_units", t.dead_stock_units),
                    ("overstock_ratio", t.overstock_ratio),
                    ("understock_ratio", t.understock_ratio),
                    ("holding_cost_rate", t.holding_cost_rate),
                    ("demand_lift_high", t.demand_lift_high),
                    ("demand_lift_moderate", t.demand_lift_moderate),
                    ("restock_daily_units", t.restock_daily_units),
                ]
            }
        }
    }
}

// ── Formal wear ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormalWearThresholds {
    pub alteration_rate_excellent: f64,
    pub alteration_rate_target: f64,
    /// Rows above this alteration rate raise the critical alteration alert.
    pub alteration_rate_critical: f64,

    pub return_rate_excellent: f64,
    pub return_rate_threshold: f64,
    pub return_rate_critical: f64,

    pub satisfaction_excellent: f64,
    pub satisfaction_target: f64,
    pub satisfaction_minimum: f64,

    /// Country mean margin at or above this is reported as premium.
    pub margin_premium: f64,
    pub margin_target: f64,
    pub margin_minimum: f64,

    pub bundle_attach_excellent: f64,
    pub bundle_attach_target: f64,
    /// Rows below this attach rate count as low attachment.
    pub bundle_attach_minimum: f64,

    pub demand_index_exceptional: f64,
    pub demand_index_high: f64,
    pub demand_index_good: f64,
    pub demand_index_low: f64,

    pub bundle_margin_high: f64,
    pub bundle_margin_low: f64,
    pub bundle_effectiveness_best: f64,
    pub improvement_opportunity: f64,
    pub store_health_low: f64,
    /// Smallest group reported by grouped breakdowns.
    pub min_group_size: usize,
}

impl Default for FormalWearThresholds {
    fn default() -> Self {
        Self {
            alteration_rate_excellent: 10.0,
            alteration_rate_target: 15.0,
            alteration_rate_critical: 25.0,
            return_rate_excellent: 3.0,
            return_rate_threshold: 5.0,
            return_rate_critical: 10.0,
            satisfaction_excellent: 4.7,
            satisfaction_target: 4.5,
            satisfaction_minimum: 4.0,
            margin_premium: 70.0,
            margin_target: 60.0,
            margin_minimum: 50.0,
            bundle_attach_excellent: 75.0,
            bundle_attach_target: 65.0,
            bundle_attach_minimum: 50.0,
            demand_index_exceptional: 9.0,
            demand_index_high: 8.0,
            demand_index_good: 7.0,
            demand_index_low: 6.0,
            bundle_margin_high: 40.0,
            bundle_margin_low: 30.0,
            bundle_effectiveness_best: 80.0,
            improvement_opportunity: 15.0,
            store_health_low: 50.0,
            min_group_size: 3,
        }
    }
}

// ── Franchise operations ────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FranchiseThresholds {
    pub performance_score_excellent: f64,
    pub compliance_score_target: f64,
    pub satisfaction_target: f64,
    pub revenue_achievement_target: f64,
    /// Hours.
    pub support_resolution_target: f64,
    pub feasibility_high: f64,
    pub roi_excellent: f64,
    /// USD.
    pub investment_major: f64,
    pub ticket_resolution_excellent: f64,
    pub critical_issue_threshold: f64,
}

impl Default for FranchiseThresholds {
    fn default() -> Self {
        Self {
            performance_score_excellent: 95.0,
            compliance_score_target: 95.0,
            satisfaction_target: 4.5,
            revenue_achievement_target: 100.0,
            support_resolution_target: 24.0,
            feasibility_high: 8.5,
            roi_excellent: 20.0,
            investment_major: 500_000.0,
            ticket_resolution_excellent: 95.0,
            critical_issue_threshold: 3.0,
        }
    }
}

// ── Store performance ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreThresholds {
    pub conversion_excellent: f64,
    pub conversion_good: f64,
    pub conversion_poor: f64,
    /// TL per staff hour.
    pub sales_per_hour_target: f64,
    pub training_score_minimum: f64,
    pub kpi_achievement_excellent: f64,
    pub kpi_achievement_good: f64,
    pub kpi_achievement_poor: f64,
    /// Absolute week-over-week change (%) reported as growth or decline.
    pub week_over_week_swing: f64,
    pub suit_share: f64,
    pub productivity_top_rank: f64,
    pub weather_conversion_impact: f64,
    pub mall_capture: f64,
}

impl Default for StoreThresholds {
    fn default() -> Self {
        Self {
            conversion_excellent: 28.0,
            conversion_good: 23.0,
            conversion_poor: 20.0,
            sales_per_hour_target: 3000.0,
            training_score_minimum: 8.5,
            kpi_achievement_excellent: 105.0,
            kpi_achievement_good: 95.0,
            kpi_achievement_poor: 85.0,
            week_over_week_swing: 10.0,
            suit_share: 50.0,
            productivity_top_rank: 3.0,
            weather_conversion_impact: 5.0,
            mall_capture: 5.0,
        }
    }
}

// ── Inventory ───────────────────────────────────────────────────────

/// Day counts are days of supply at the recent average sales rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InventoryThresholds {
    /// Stock gone within this many days even in the expected case.
    pub imminent_days: f64,
    pub very_critical_days: f64,
    pub critical_days: f64,
    pub warning_days: f64,
    /// Replenishment and stockout reports look this far ahead.
    pub watch_days: f64,
    /// Ideal cover for allocations and transfers.
    pub target_supply_days: f64,
    pub excess_supply_days: f64,
    /// Units.
    pub transfer_min_qty: f64,
    /// Units on hand with no sales that mark dead stock.
    pub dead_stock_units: f64,
    /// Multiples of the optimal stock level.
    pub overstock_ratio: f64,
    pub understock_ratio: f64,
    /// Monthly share of stock value.
    pub holding_cost_rate: f64,
    /// Weather-adjusted demand lift over the base rate, in percent.
    pub demand_lift_high: f64,
    pub demand_lift_moderate: f64,
    /// Forecast units per day above which a restock is advised.
    pub restock_daily_units: f64,
}

impl Default for InventoryThresholds {
    fn default() -> Self {
        Self {
            imminent_days: 2.0,
            very_critical_days: 1.5,
            critical_days: 3.0,
            warning_days: 5.0,
            watch_days: 7.0,
            target_supply_days: 14.0,
            excess_supply_days: 30.0,
            transfer_min_qty: 5.0,
            dead_stock_units: 50.0,
            overstock_ratio: 2.0,
            understock_ratio: 0.3,
            holding_cost_rate: 0.02,
            demand_lift_high: 30.0,
            demand_lift_moderate: 10.0,
            restock_daily_units: 30.0,
        }
    }
}
