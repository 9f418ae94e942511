use atelier_core::Row;
use atelier_intent::{Engine, QueryContext, Registry};

pub fn context(engine: Engine, text: &str, query_type: Option<&str>) -> QueryContext {
    let registry = Registry::builtin(engine).expect("builtin registry");
    QueryContext::build(&registry, text, query_type)
}

/// One row carrying a label for every tier column and a value for every
/// numeric column the rule sets read.
pub fn kitchen_sink(i: usize) -> Row {
    Row::new()
        .with("store_id", format!("SV{:03}", i + 1))
        .with("employee_id", format!("E{i}"))
        .with("franchise_partner", format!("Partner {}", i % 3))
        .with("suit_type", "Wedding")
        .with("bundle_type", "Wedding Complete")
        .with("occasion_type", "Wedding")
        .with("size", "50")
        .with("fit_type", "Regular")
        .with("country", "Turkey")
        .with("region", "Marmara")
        .with("target_city", "Berlin")
        .with("target_country", "Germany")
        .with("primary_role", "Sales")
        .with("typical_body_type", "Athletic Build")
        .with("trending_colors", "Navy, Charcoal")
        .with("trending_fabrics", "Wool")
        .with("franchise_flag", if i % 2 == 0 { "owned" } else { "franchise" })
        .with("weather_impact", "rain")
        .with("performance_tier", if i % 2 == 0 { "🏆 Star Performer" } else { "⭐ Top 10%" })
        .with("fit_quality", "🔴 Critical Fit Problem")
        .with("bundle_status", "⭐ Bundle Superstar")
        .with("value_tier", "🎁 Ultra Value")
        .with("market_coverage", "🌟 Universal Appeal")
        .with("demand_status", "🌟 Perfect Match")
        .with("fit_assessment", "🔴 Critical Fit Issues")
        .with("satisfaction_tier", "📉 Low Satisfaction")
        .with("return_risk", "🔴 High Return Risk")
        .with("demand_level", "🚀 Explosive Demand")
        .with("market_type", "💎 Premium Market")
        .with("product_diversity", "🎨 High Fashion Diversity")
        .with("market_stability", "⚡ Volatile")
        .with("event_influence", "🎉 Event Driven")
        .with("overall_performance", "⭐ Excellence")
        .with("operational_complexity", "🌈 High Complexity")
        .with("partner_tier_assessment", "⚠️ Needs Improvement")
        .with("revenue_performance", "🔴 Revenue Below Target")
        .with("issue_status", "🔴 Multiple Critical Issues")
        .with("performance_classification", "🏆 Top Performer")
        .with("compliance_status", "🔴 Compliance Attention Needed")
        .with("contract_status", "⏰ Contract Renewal Urgent")
        .with("expansion_assessment", "🚀 Prime Expansion Candidate")
        .with("opportunity_classification", "🚀 Premium Opportunity")
        .with("timeline_assessment", "⚡ Fast Track")
        .with("support_performance_tier", "⚠️ Support Improvement Needed")
        .with("ticket_urgency_status", "🚨 Critical Delay")
        .with("cost_impact_level", "💰 High Cost Impact")
        .with("conversion_status", "🟢 Excellent")
        .with("store_category", "⭐ Star Store")
        .with("training_status", "📚 Training Required")
        .with("specialty", "🤵 Suit Specialist")
        .with("conversion_tier", "⚠️ Poor Converter")
        .with("performance_pattern", "🎯 Weekend Performer")
        .with("performance_level", "🔴 Missing Targets")
        .with("trend_direction", "📉 Declining")
        .with("primary_focus_area", "revenue generation")
        .with("gross_revenue", 10_000.0 + i as f64 * 500.0)
        .with("units_sold", 40 + i as i64)
        .with("avg_margin_pct", 62.5)
        .with("alteration_rate", 30.0)
        .with("bundle_attach_rate", 20.0)
        .with("improvement_opportunity_score", 22.0)
        .with("bundle_effectiveness_score", 91.0)
        .with("customer_value_created", 1500.0)
        .with("margin_pct", 25.0)
        .with("size_quality_score", 88.0)
        .with("total_returns", 4)
        .with("avg_demand_index", 9.4)
        .with("store_health_score", 42.0)
        .with("total_transactions", 120)
        .with("avg_performance_score", 71.0)
        .with("stores_managed", 4)
        .with("total_critical_issues", 5)
        .with("compliance_score", 80.0)
        .with("investment_required_usd", 650_000.0)
        .with("roi_projection_pct", 24.0)
        .with("partner_avg_resolution_time", 30.0)
        .with("partner_avg_satisfaction", 4.1)
        .with("resolution_rate_pct", 88.0)
        .with("daily_revenue_rank", (i + 1) as i64)
        .with("net_revenue", 45_000.0)
        .with("week_over_week_change", -15.0)
        .with("suit_percentage", 55.0)
        .with("total_revenue_30d", 900_000.0)
        .with("productivity_rank", (i + 1) as i64)
        .with("revenue_per_staff_hour", 4500.0)
        .with("avg_sales_per_hour", 3200.0)
        .with("total_sales_value", 80_000.0)
        .with("mall_capture_rate", 7.5)
        .with("total_visitors", 800)
        .with("conversion_rate", 31.0)
        .with("store_name", format!("Mağaza {}", i + 1))
        .with("product_name", "Kaşmir Kaban")
        .with("from_store", "Mağaza Merkez")
        .with("to_store", format!("Mağaza {}", i + 1))
        .with("urgency_level", "🔴 ÇOK KRİTİK")
        .with("action_required", "ACİL SİPARİŞ VER!")
        .with("risk_level", "🔴 Hemen tükenecek")
        .with("worst_case", "⚠️ En kötü senaryoda kritik")
        .with("recommendation", "📦 Stok takviyesi önerilir")
        .with("stock_status", "💀 ÖLMÜŞ STOK")
        .with("store_status", "🚨 KRİTİK DURUM")
        .with("allocation_reason", if i == 0 { "Yüksek talep ve trend" } else { "Düşük talep" })
        .with("priority", "🔴 Yüksek öncelik")
        .with("transfer_type", "Şehirler arası")
        .with("days_remaining", 1.5)
        .with("predicted_stockout_date", "2024-12-03")
        .with("suggested_order_qty", 60)
        .with("expected_days", 1.8)
        .with("worst_case_days", 1.1)
        .with("current_stock", 12)
        .with("avg_temp", -2.0)
        .with("forecast_daily_units", 36.0)
        .with("forecast_daily_revenue", 180_000.0)
        .with("change_percentage", 50.0)
        .with("monthly_holding_cost_tl", 2400.0)
        .with("stock_difference", 40)
        .with("monthly_turnover", 0.4)
        .with("total_skus", 120)
        .with("out_of_stock", 3)
        .with("critical_items", 6)
        .with("stock_value_tl", 1_250_000.0)
        .with("avg_daily_sales_30d", 8.0)
        .with("ai_recommended_qty", 100 + i as i64)
        .with("erp_suggested_qty", 100)
        .with("difference", i as i64)
        .with("suggested_transfer_qty", 12)
}
