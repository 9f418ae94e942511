//! Rule sets per category.
//!
//! A rule reads the row set and returns its own [`Findings`]. Rules never see
//! each other's output, so one failing rule costs only its own findings. The
//! analyzer runs them in order: category rules first, then the shared
//! entity-focus and concentration rules.

use atelier_core::{FieldError, Row};
use atelier_intent::{Category, Engine, Language, QueryContext};
use indexmap::IndexMap;

use crate::outcome::Findings;
use crate::thresholds::ThresholdConfig;
use crate::tiers::TierIndex;

mod common;
mod formal_wear;
mod franchise;
mod inventory;
mod store;

pub type RuleResult = Result<Findings, FieldError>;

/// Everything a rule may read.
pub struct RuleInput<'a> {
    pub rows: &'a [Row],
    pub tiers: &'a TierIndex<'a>,
    pub category: Category,
    pub context: &'a QueryContext,
    pub thresholds: &'a ThresholdConfig,
}

impl RuleInput<'_> {
    /// Language rule text is written in for this category's engine.
    pub fn language(&self) -> Language {
        output_language(self.category.engine())
    }
}

#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub run: fn(&RuleInput<'_>) -> RuleResult,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// Formal-wear rules speak English; the other engines speak Turkish.
pub fn output_language(engine: Engine) -> Language {
    match engine {
        Engine::FormalWear => Language::English,
        Engine::FranchiseOps | Engine::StorePerformance | Engine::Inventory => Language::Turkish,
    }
}

/// Ordered rules for `category`, shared rules last.
pub fn rule_set(category: Category) -> Vec<Rule> {
    let specific: &[Rule] = match category {
        Category::SuitSales => formal_wear::SUIT_SALES,
        Category::BundleAnalysis => formal_wear::BUNDLE_ANALYSIS,
        Category::SizeAnalysis => formal_wear::SIZE_ANALYSIS,
        Category::SeasonalTrends => formal_wear::SEASONAL_TRENDS,
        Category::CrossAnalysis => formal_wear::CROSS_ANALYSIS,
        Category::Predictive => common::PREDICTIVE,
        Category::Anomaly => common::ANOMALY,
        Category::PartnerPerformance => franchise::PARTNER_PERFORMANCE,
        Category::StoreNetwork => franchise::STORE_NETWORK,
        Category::ExpansionAnalysis => franchise::EXPANSION_ANALYSIS,
        Category::SupportTickets => franchise::SUPPORT_TICKETS,
        Category::DailyPerformance | Category::TrendAnalysis => store::DAILY_PERFORMANCE,
        Category::StoreComparison | Category::RegionalPerformance | Category::FranchiseAnalysis => {
            store::STORE_COMPARISON
        }
        Category::StaffAnalysis => store::STAFF_ANALYSIS,
        Category::TrafficConversion | Category::HourlyPatterns | Category::WeekendAnalysis => {
            store::TRAFFIC_CONVERSION
        }
        Category::KpiTracking => store::KPI_TRACKING,
        Category::StockReplenishment => inventory::STOCK_REPLENISHMENT,
        Category::StockoutPrediction => inventory::STOCKOUT_PREDICTION,
        Category::DemandForecast => inventory::DEMAND_FORECAST,
        Category::InventoryOptimization => inventory::INVENTORY_OPTIMIZATION,
        Category::StockAlerts => inventory::STOCK_ALERTS,
        Category::Allocation => inventory::ALLOCATION,
        Category::StockTransfer => inventory::STOCK_TRANSFER,
    };

    specific.iter().chain(common::SHARED).copied().collect()
}

/// Column whose share the concentration rule reports.
pub fn primary_measure(category: Category) -> Option<&'static str> {
    match category {
        Category::SuitSales => Some("gross_revenue"),
        Category::BundleAnalysis => Some("total_revenue"),
        Category::SizeAnalysis => Some("total_units"),
        Category::SeasonalTrends => Some("avg_demand_index"),
        Category::CrossAnalysis => Some("total_transactions"),
        Category::PartnerPerformance => Some("stores_managed"),
        Category::ExpansionAnalysis => Some("investment_required_usd"),
        Category::SupportTickets => Some("total_cost_impact"),
        Category::DailyPerformance | Category::TrendAnalysis => Some("net_revenue"),
        Category::StoreComparison | Category::RegionalPerformance | Category::FranchiseAnalysis => {
            Some("total_revenue_30d")
        }
        Category::StaffAnalysis => Some("total_sales_value"),
        Category::TrafficConversion | Category::HourlyPatterns | Category::WeekendAnalysis => {
            Some("total_visitors")
        }
        Category::StockReplenishment => Some("suggested_order_qty"),
        Category::StockoutPrediction => Some("current_stock"),
        Category::DemandForecast => Some("forecast_daily_units"),
        Category::InventoryOptimization => Some("monthly_holding_cost_tl"),
        Category::StockAlerts => Some("stock_value_tl"),
        Category::Allocation => Some("ai_recommended_qty"),
        Category::StockTransfer => Some("suggested_transfer_qty"),
        Category::Predictive | Category::Anomaly | Category::StoreNetwork | Category::KpiTracking => None,
    }
}

// ── Row helpers ─────────────────────────────────────────────────────

/// Sum of a numeric column, missing values counted as zero.
pub(crate) fn sum<'r>(rows: impl IntoIterator<Item = &'r Row>, column: &str) -> f64 {
    rows.into_iter().map(|r| r.number_or_zero(column)).sum()
}

/// Mean over every row, missing values counted as zero. Zero for no rows.
pub(crate) fn mean_all(rows: &[Row], column: &str) -> f64 {
    if rows.is_empty() {
        0.0
    } else {
        sum(rows, column) / rows.len() as f64
    }
}

/// Rows whose numeric `column` satisfies `pred`. Rows without the value are skipped.
pub(crate) fn where_number<'r>(rows: &'r [Row], column: &str, pred: impl Fn(f64) -> bool) -> Vec<&'r Row> {
    rows.iter()
        .filter(|r| r.number(column).is_some_and(&pred))
        .collect()
}

/// Row with the largest `column`; the first one wins ties.
pub(crate) fn max_by<'r>(rows: &[&'r Row], column: &str) -> Option<&'r Row> {
    let mut best: Option<(&'r Row, f64)> = None;
    for row in rows {
        let value = row.number_or_zero(column);
        if best.map_or(true, |(_, b)| value > b) {
            best = Some((row, value));
        }
    }
    best.map(|(row, _)| row)
}

/// Distinct rendered values of `column` in first-seen order. A row lacking the
/// column is an error.
pub(crate) fn distinct_required<'r>(
    rows: impl IntoIterator<Item = &'r Row>,
    column: &str,
) -> Result<Vec<String>, FieldError> {
    let mut seen: Vec<String> = Vec::new();
    for row in rows {
        let value = row.require_text(column)?;
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    Ok(seen)
}

/// Number of distinct present values of `column`.
pub(crate) fn distinct_count(rows: &[Row], column: &str) -> usize {
    let mut seen: Vec<String> = Vec::new();
    for value in rows.iter().filter_map(|r| r.get(column)).filter(|v| !v.is_null()) {
        let value = value.to_string();
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen.len()
}

/// Group rows by the rendered value of `column`, first-seen order. Rows
/// without the value go under `missing`.
pub(crate) fn group_by<'r>(rows: &'r [Row], column: &str, missing: &str) -> IndexMap<String, Vec<&'r Row>> {
    let mut groups: IndexMap<String, Vec<&'r Row>> = IndexMap::new();
    for row in rows {
        let key = match row.get(column) {
            Some(v) if !v.is_null() => v.to_string(),
            _ => missing.to_string(),
        };
        groups.entry(key).or_default().push(row);
    }
    groups
}
