//! Query planner: turn a [`QueryContext`] plus request fields into the
//! template id and typed parameters handed to the executor.
//!
//! Pure: the reference date comes from [`EngineConfig::today`], so a fixed
//! `ATELIER_REFERENCE_DATE` makes plans reproducible. Tier cutoffs are bound
//! from the loaded [`ThresholdConfig`], so overrides reach the SQL.

use atelier_core::config::EngineConfig;
use atelier_core::{ParamValue, QueryRequest};
use atelier_insight::ThresholdConfig;
use atelier_intent::{canonical_country, Category, Engine, EntityKind, QueryContext};
use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

pub const DEFAULT_DATE_RANGE: i64 = 7;
pub const TREND_DATE_RANGE: i64 = 30;
pub const MAX_DATE_RANGE: i64 = 366;
/// Units split across stores when an allocation request names no quantity.
pub const DEFAULT_ALLOCATION_QUANTITY: i64 = 1000;

/// Request fields the planner reads besides the question itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanInput {
    pub limit: Option<i64>,
    pub store_id: Option<String>,
    pub date_range: Option<i64>,
    /// Units to allocate; allocation reports only.
    pub quantity: Option<i64>,
    /// Product filter for inventory reports.
    pub sku: Option<String>,
}

/// Resolved plan. `request` is what runs; the other fields are echoed back
/// to the caller under `parameters`.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPlan {
    pub request: QueryRequest,
    pub report: &'static str,
    pub limit: u32,
    pub window: DateWindow,
    pub store_id: Option<String>,
    pub country: Option<&'static str>,
    pub quantity: i64,
}

/// Inclusive date filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Report template a category is answered from. Several store categories and
/// the formal-wear forecast/anomaly views share a report.
pub fn report_for(category: Category) -> &'static str {
    match category {
        Category::SuitSales | Category::Predictive | Category::Anomaly => "suit_sales",
        Category::BundleAnalysis => "bundle_analysis",
        Category::SizeAnalysis => "size_analysis",
        Category::SeasonalTrends => "seasonal_trends",
        Category::CrossAnalysis => "cross_analysis",
        Category::PartnerPerformance => "partner_performance",
        Category::StoreNetwork => "store_network",
        Category::ExpansionAnalysis => "expansion_analysis",
        Category::SupportTickets => "support_tickets",
        Category::DailyPerformance | Category::TrendAnalysis => "daily_performance",
        Category::StoreComparison | Category::RegionalPerformance | Category::FranchiseAnalysis => {
            "store_comparison"
        }
        Category::StaffAnalysis => "staff_analysis",
        Category::TrafficConversion | Category::HourlyPatterns | Category::WeekendAnalysis => {
            "traffic_conversion"
        }
        Category::KpiTracking => "kpi_tracking",
        Category::StockReplenishment => "stock_replenishment",
        Category::StockoutPrediction => "stockout_prediction",
        Category::DemandForecast => "demand_forecast",
        Category::InventoryOptimization => "inventory_optimization",
        Category::StockAlerts => "stock_alerts",
        Category::Allocation => "allocation",
        Category::StockTransfer => "stock_transfer",
    }
}

/// `<engine>/<report>`, the key of the SQL template catalog.
pub fn template_id(category: Category) -> String {
    format!("{}/{}", category.engine(), report_for(category))
}

/// Clamp a requested limit into `1..=max_limit`.
pub fn resolve_limit(requested: Option<i64>, engine: &EngineConfig) -> u32 {
    let max = i64::from(engine.max_limit.max(1));
    let limit = requested.unwrap_or(i64::from(engine.default_limit)).clamp(1, max);
    u32::try_from(limit).unwrap_or(engine.max_limit)
}

/// Window for a recognised time phrase, relative to `today`.
pub fn period_window(period: &str, today: NaiveDate) -> Option<DateWindow> {
    let monday = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
    let window = |start, end| Some(DateWindow { start, end });
    match period.trim() {
        "bugün" | "today" => window(today, today),
        "dün" | "yesterday" => {
            let day = today - Duration::days(1);
            window(day, day)
        }
        "bu hafta" | "this week" => window(monday, today),
        "geçen hafta" | "last week" => window(monday - Duration::days(7), monday - Duration::days(1)),
        "bu ay" | "this month" => window(today.with_day(1).unwrap_or(today), today),
        _ => None,
    }
}

/// Time phrase first; otherwise the last `date_range` days up to `today`.
pub fn resolve_window(
    period: Option<&str>,
    date_range: Option<i64>,
    category: Category,
    today: NaiveDate,
) -> DateWindow {
    if let Some(window) = period.and_then(|p| period_window(p, today)) {
        return window;
    }
    let default_days = match category {
        Category::TrendAnalysis => TREND_DATE_RANGE,
        c if c.engine() == Engine::Inventory => TREND_DATE_RANGE,
        _ => DEFAULT_DATE_RANGE,
    };
    let days = date_range.unwrap_or(default_days).clamp(1, MAX_DATE_RANGE);
    DateWindow {
        start: today - Duration::days(days),
        end: today,
    }
}

fn canonical_season(raw: &str) -> Option<&'static str> {
    match raw.trim() {
        "kış" | "winter" => Some("winter"),
        "yaz" | "summer" => Some("summer"),
        "bahar" | "spring" => Some("spring"),
        "sonbahar" | "fall" | "autumn" => Some("fall"),
        _ => None,
    }
}

/// Build the executor request for `context`.
///
/// Every template parameter the repo knows is bound; templates ignore the
/// ones they do not reference. Missing entities bind SQL `NULL`. The
/// category's engine thresholds bind as floats under their field names.
pub fn plan(
    context: &QueryContext,
    input: &PlanInput,
    engine: &EngineConfig,
    thresholds: &ThresholdConfig,
) -> QueryPlan {
    let category = context.detected_category;
    let entities = &context.entities;

    let limit = resolve_limit(input.limit, engine);
    let window = resolve_window(
        entities.first(EntityKind::TimePeriod),
        input.date_range,
        category,
        engine.today(),
    );
    let store_id = input
        .store_id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .or_else(|| entities.first(EntityKind::Store))
        .map(str::to_uppercase);
    let country = entities.first(EntityKind::Country).and_then(canonical_country);
    let season = entities.first(EntityKind::Season).and_then(canonical_season);
    let quantity = input.quantity.unwrap_or(DEFAULT_ALLOCATION_QUANTITY).max(1);
    let sku = input
        .sku
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_uppercase);

    let mut request = QueryRequest::new(template_id(category))
        .with("limit", ParamValue::Integer(i64::from(limit)))
        .with("start_date", ParamValue::Date(window.start))
        .with("end_date", ParamValue::Date(window.end))
        .with("country", ParamValue::text_or_null(country))
        .with("store_id", ParamValue::text_or_null(store_id.clone()))
        .with("suit_type", ParamValue::text_or_null(entities.first(EntityKind::SuitType)))
        .with("season", ParamValue::text_or_null(season))
        .with("size", ParamValue::text_or_null(entities.first(EntityKind::Size)))
        .with("quantity", ParamValue::Integer(quantity))
        .with("sku", ParamValue::text_or_null(sku));
    for (name, value) in thresholds.sql_parameters(category.engine()) {
        request = request.with(name, ParamValue::Float(value));
    }

    QueryPlan {
        request,
        report: report_for(category),
        limit,
        window,
        store_id,
        country,
        quantity,
    }
}
