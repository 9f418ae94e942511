//! Engines and the closed set of report categories each one answers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Raised when a string names no known engine or category.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unknown name: {0}")]
pub struct UnknownName(pub String);

// ── Engine ───────────────────────────────────────────────────

/// One analytics engine: its own pattern registry, categories and rule sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Engine {
    FormalWear,
    FranchiseOps,
    StorePerformance,
    Inventory,
}

impl Engine {
    pub const ALL: [Engine; 4] = [
        Engine::FormalWear,
        Engine::FranchiseOps,
        Engine::StorePerformance,
        Engine::Inventory,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Engine::FormalWear => "formal_wear",
            Engine::FranchiseOps => "franchise_ops",
            Engine::StorePerformance => "store_performance",
            Engine::Inventory => "inventory",
        }
    }

    /// URL path segment, e.g. `formal-wear`.
    pub fn slug(&self) -> &'static str {
        match self {
            Engine::FormalWear => "formal-wear",
            Engine::FranchiseOps => "franchise-ops",
            Engine::StorePerformance => "store-performance",
            Engine::Inventory => "inventory",
        }
    }

    /// Category returned when nothing in the text matches.
    pub fn default_category(&self) -> Category {
        match self {
            Engine::FormalWear => Category::SuitSales,
            Engine::FranchiseOps => Category::PartnerPerformance,
            Engine::StorePerformance => Category::DailyPerformance,
            Engine::Inventory => Category::StockReplenishment,
        }
    }

    /// Categories in registry order.
    pub fn categories(&self) -> &'static [Category] {
        use Category::*;
        match self {
            Engine::FormalWear => &[
                SuitSales,
                BundleAnalysis,
                SizeAnalysis,
                SeasonalTrends,
                CrossAnalysis,
                Predictive,
                Anomaly,
            ],
            Engine::FranchiseOps => &[
                PartnerPerformance,
                StoreNetwork,
                ExpansionAnalysis,
                SupportTickets,
            ],
            Engine::StorePerformance => &[
                DailyPerformance,
                StoreComparison,
                StaffAnalysis,
                TrafficConversion,
                KpiTracking,
                TrendAnalysis,
                RegionalPerformance,
                FranchiseAnalysis,
                HourlyPatterns,
                WeekendAnalysis,
            ],
            Engine::Inventory => &[
                StockReplenishment,
                StockoutPrediction,
                DemandForecast,
                InventoryOptimization,
                StockAlerts,
                Allocation,
                StockTransfer,
            ],
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Engine {
    type Err = UnknownName;

    /// Accepts both the snake_case id and the URL slug.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Engine::ALL
            .into_iter()
            .find(|e| e.as_str() == s || e.slug() == s)
            .ok_or_else(|| UnknownName(s.to_string()))
    }
}

// ── Category ─────────────────────────────────────────────────

/// The classified topic of a question. Each category belongs to exactly one engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    // formal wear
    SuitSales,
    BundleAnalysis,
    SizeAnalysis,
    SeasonalTrends,
    CrossAnalysis,
    Predictive,
    Anomaly,
    // franchise operations
    PartnerPerformance,
    StoreNetwork,
    ExpansionAnalysis,
    SupportTickets,
    // store performance
    DailyPerformance,
    StoreComparison,
    StaffAnalysis,
    TrafficConversion,
    KpiTracking,
    TrendAnalysis,
    RegionalPerformance,
    FranchiseAnalysis,
    HourlyPatterns,
    WeekendAnalysis,
    // inventory
    StockReplenishment,
    StockoutPrediction,
    DemandForecast,
    InventoryOptimization,
    StockAlerts,
    Allocation,
    StockTransfer,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::SuitSales => "suit_sales",
            Category::BundleAnalysis => "bundle_analysis",
            Category::SizeAnalysis => "size_analysis",
            Category::SeasonalTrends => "seasonal_trends",
            Category::CrossAnalysis => "cross_analysis",
            Category::Predictive => "predictive",
            Category::Anomaly => "anomaly",
            Category::PartnerPerformance => "partner_performance",
            Category::StoreNetwork => "store_network",
            Category::ExpansionAnalysis => "expansion_analysis",
            Category::SupportTickets => "support_tickets",
            Category::DailyPerformance => "daily_performance",
            Category::StoreComparison => "store_comparison",
            Category::StaffAnalysis => "staff_analysis",
            Category::TrafficConversion => "traffic_conversion",
            Category::KpiTracking => "kpi_tracking",
            Category::TrendAnalysis => "trend_analysis",
            Category::RegionalPerformance => "regional_performance",
            Category::FranchiseAnalysis => "franchise_analysis",
            Category::HourlyPatterns => "hourly_patterns",
            Category::WeekendAnalysis => "weekend_analysis",
            Category::StockReplenishment => "stock_replenishment",
            Category::StockoutPrediction => "stockout_prediction",
            Category::DemandForecast => "demand_forecast",
            Category::InventoryOptimization => "inventory_optimization",
            Category::StockAlerts => "stock_alerts",
            Category::Allocation => "allocation",
            Category::StockTransfer => "stock_transfer",
        }
    }

    pub fn engine(&self) -> Engine {
        match self {
            Category::SuitSales
            | Category::BundleAnalysis
            | Category::SizeAnalysis
            | Category::SeasonalTrends
            | Category::CrossAnalysis
            | Category::Predictive
            | Category::Anomaly => Engine::FormalWear,
            Category::PartnerPerformance
            | Category::StoreNetwork
            | Category::ExpansionAnalysis
            | Category::SupportTickets => Engine::FranchiseOps,
            Category::StockReplenishment
            | Category::StockoutPrediction
            | Category::DemandForecast
            | Category::InventoryOptimization
            | Category::StockAlerts
            | Category::Allocation
            | Category::StockTransfer => Engine::Inventory,
            _ => Engine::StorePerformance,
        }
    }

    /// Resolve an id, including the legacy aliases some callers still send.
    pub fn parse(s: &str) -> Option<Category> {
        let s = s.trim();
        let canonical = match s {
            "staff_performance" => "staff_analysis",
            "traffic_analysis" => "traffic_conversion",
            "kpi_achievement" => "kpi_tracking",
            "smart_replenishment" => "stock_replenishment",
            "critical_stock_alerts" => "stock_alerts",
            "transfer_recommendation" => "stock_transfer",
            other => other,
        };
        Engine::ALL
            .iter()
            .flat_map(|e| e.categories().iter().copied())
            .find(|c| c.as_str() == canonical)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::parse(s).ok_or_else(|| UnknownName(s.to_string()))
    }
}
