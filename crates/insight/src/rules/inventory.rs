//! Inventory rules: replenishment, stockout risk, weather-driven demand,
//! stock optimization, store alerts, warehouse allocation and inter-store
//! transfers. Output is Turkish.

use atelier_core::Row;

use super::{distinct_count, mean_all, sum, where_number, Rule, RuleInput, RuleResult};
use crate::allocation::{days_of_supply, efficiency_score};
use crate::fmt::{fixed, grouped, round1};
use crate::outcome::Findings;
use crate::tiers::inventory::*;

pub(super) const STOCK_REPLENISHMENT: &[Rule] = &[
    Rule { name: "urgent_items", run: urgent_items },
    Rule { name: "order_actions", run: order_actions },
    Rule { name: "replenishment_summary", run: replenishment_summary },
];

pub(super) const STOCKOUT_PREDICTION: &[Rule] = &[
    Rule { name: "imminent_stockouts", run: imminent_stockouts },
    Rule { name: "worst_case", run: worst_case },
    Rule { name: "stockout_summary", run: stockout_summary },
];

pub(super) const DEMAND_FORECAST: &[Rule] = &[
    Rule { name: "demand_outlook", run: demand_outlook },
    Rule { name: "restock_advice", run: restock_advice },
    Rule { name: "forecast_summary", run: forecast_summary },
];

pub(super) const INVENTORY_OPTIMIZATION: &[Rule] = &[
    Rule { name: "dead_stock", run: dead_stock },
    Rule { name: "stock_balance", run: stock_balance },
    Rule { name: "optimization_summary", run: optimization_summary },
];

pub(super) const STOCK_ALERTS: &[Rule] = &[
    Rule { name: "critical_stores", run: critical_stores },
    Rule { name: "out_of_stock", run: out_of_stock },
    Rule { name: "alerts_summary", run: alerts_summary },
];

pub(super) const ALLOCATION: &[Rule] = &[
    Rule { name: "allocation_split", run: allocation_split },
    Rule { name: "allocation_shifts", run: allocation_shifts },
    Rule { name: "allocation_efficiency", run: allocation_efficiency },
];

pub(super) const STOCK_TRANSFER: &[Rule] = &[
    Rule { name: "transfer_plan", run: transfer_plan },
    Rule { name: "transfer_priority", run: transfer_priority },
    Rule { name: "transfer_summary", run: transfer_summary },
];

const LISTED: usize = 3;

/// `"<store> - <product> <size>"` for item-level rows.
fn item_label(row: &Row) -> Result<String, atelier_core::FieldError> {
    let mut label = format!("{} - {}", row.require_text("store_name")?, row.require_text("product_name")?);
    if let Some(size) = row.get("size").filter(|v| !v.is_null()) {
        label.push(' ');
        label.push_str(&size.to_string());
    }
    Ok(label)
}

// ── Replenishment ───────────────────────────────────────────────────

fn urgent_items(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let mut urgent = input.tiers.rows_in(ReplenishmentUrgency::VeryCritical);
    urgent.extend(input.tiers.rows_in(ReplenishmentUrgency::Critical));
    if urgent.is_empty() {
        out.insight(format!(
            "🟢 {} gün içinde tükenecek kritik ürün yok",
            fixed(input.thresholds.inventory.critical_days, 0)
        ));
        return Ok(out);
    }
    out.alert(format!(
        "🔴 {} ürün {} gün içinde tükenecek",
        urgent.len(),
        fixed(input.thresholds.inventory.critical_days, 0)
    ));
    for row in urgent.iter().take(LISTED) {
        out.insight(format!(
            "  • {}: {} gün kaldı",
            item_label(row)?,
            row.require_text("days_remaining")?
        ));
    }
    Ok(out)
}

fn order_actions(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let now = input.tiers.count(OrderAction::OrderNow);
    let today = input.tiers.count(OrderAction::OrderToday);
    if now > 0 {
        out.alert(format!("🚨 {now} ürün tedarik süresinden önce tükenecek"));
        out.recommend("Tedarik süresini aşan ürünler için siparişleri hemen onaylayın");
    }
    if today > 0 {
        out.recommend(format!("{today} ürün için siparişi bugün verin"));
    }
    let week = input.tiers.count(OrderAction::OrderThisWeek);
    if week > 0 {
        out.insight(format!("📅 {week} ürün bu hafta sipariş gerektiriyor"));
    }
    Ok(out)
}

fn replenishment_summary(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let units = sum(input.rows, "suggested_order_qty");
    let stores = distinct_count(input.rows, "store_id");
    out.insight(format!("📦 Önerilen toplam sipariş: {} adet ({stores} mağaza)", grouped(units)));
    out.metric("items_at_risk", input.rows.len() as f64);
    out.metric("stores_affected", stores as f64);
    out.metric("total_order_qty", units);
    out.metric("avg_days_remaining", round1(mean_all(input.rows, "days_remaining")));
    Ok(out)
}

// ── Stockout prediction ─────────────────────────────────────────────

fn imminent_stockouts(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let imminent = input.tiers.rows_in(StockoutRisk::Imminent);
    if !imminent.is_empty() {
        out.alert(format!(
            "🔴 {} ürün {} gün içinde tükenecek",
            imminent.len(),
            fixed(input.thresholds.inventory.imminent_days, 0)
        ));
        for row in imminent.iter().take(LISTED) {
            out.insight(format!(
                "  • {}: tahmini tükenme {}",
                item_label(row)?,
                row.require_text("predicted_stockout_date")?
            ));
        }
        out.recommend("Hemen tükenecek ürünler için mağazalar arası transfer veya acil sevkiyat planlayın");
    }
    let critical = input.tiers.count(StockoutRisk::Critical) + input.tiers.count(StockoutRisk::High);
    if critical > 0 {
        out.insight(format!(
            "🟠 {critical} ürün {} gün içinde kritik seviyeye iniyor",
            fixed(input.thresholds.inventory.warning_days, 0)
        ));
    }
    Ok(out)
}

fn worst_case(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let exposed = input.tiers.count(WorstCase::Critical);
    if exposed > 0 {
        out.alert(format!("⚠️ En kötü senaryoda {exposed} ürün kritik seviyede"));
        out.recommend("En yüksek satış hızına göre güvenlik stoğunu gözden geçirin");
    }
    Ok(out)
}

fn stockout_summary(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let expected = mean_all(input.rows, "expected_days");
    out.insight(format!("⏳ Ortalama beklenen tükenme süresi: {} gün", fixed(expected, 1)));
    out.metric("items_at_risk", input.rows.len() as f64);
    out.metric("avg_expected_days", round1(expected));
    out.metric("avg_worst_case_days", round1(mean_all(input.rows, "worst_case_days")));
    out.metric("imminent", input.tiers.count(StockoutRisk::Imminent) as f64);
    Ok(out)
}

// ── Demand forecast ─────────────────────────────────────────────────

fn demand_outlook(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let high = input.tiers.rows_in(DemandOutlook::High);
    if !high.is_empty() {
        out.insight(format!(
            "🔥 {} mağazada yüksek talep bekleniyor (>%{} artış)",
            high.len(),
            fixed(input.thresholds.inventory.demand_lift_high, 0)
        ));
        for row in high.iter().take(LISTED) {
            out.insight(format!(
                "  • {}: günlük {} adet (%{})",
                row.require_text("store_name")?,
                row.require_text("forecast_daily_units")?,
                row.require_text("change_percentage")?
            ));
        }
    }
    let moderate = input.tiers.count(DemandOutlook::Moderate);
    if moderate > 0 {
        out.insight(format!("📈 {moderate} mağazada orta düzey talep artışı bekleniyor"));
    }
    Ok(out)
}

fn restock_advice(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let restock = input.tiers.count(RestockAdvice::Restock);
    if restock > 0 {
        out.alert(format!(
            "📦 {restock} mağazada günlük talep {} adedi aşıyor",
            fixed(input.thresholds.inventory.restock_daily_units, 0)
        ));
        out.recommend("Yüksek talepli mağazalara hava durumu öncesi stok takviyesi yapın");
    }
    if input.tiers.count(RestockAdvice::Check) > 0 {
        out.recommend("Orta talepli mağazalarda stok seviyelerini kontrol edin");
    }
    Ok(out)
}

fn forecast_summary(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let temperature = mean_all(input.rows, "avg_temp");
    out.insight(format!("🌡️ Ortalama sıcaklık: {}°C", fixed(temperature, 1)));
    out.metric("stores_forecast", distinct_count(input.rows, "store_id") as f64);
    out.metric("total_forecast_daily_units", sum(input.rows, "forecast_daily_units"));
    out.metric("total_forecast_daily_revenue", sum(input.rows, "forecast_daily_revenue"));
    out.metric("avg_change_pct", round1(mean_all(input.rows, "change_percentage")));
    Ok(out)
}

// ── Inventory optimization ──────────────────────────────────────────

fn dead_stock(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let dead = input.tiers.rows_in(StockStatus::Dead);
    if !dead.is_empty() {
        let cost = sum(dead.iter().copied(), "monthly_holding_cost_tl");
        out.alert(format!(
            "💀 {} üründe satışsız stok var (aylık tutma maliyeti {} TL)",
            dead.len(),
            grouped(cost)
        ));
        out.recommend("Satışsız stokları transfer edin veya outlet kanalına yönlendirin");
    }
    Ok(out)
}

fn stock_balance(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let t = &input.thresholds.inventory;
    let excess = input.tiers.count(StockStatus::Excess);
    let critical = input.tiers.count(StockStatus::CriticalLow);
    let optimal = input.tiers.count(StockStatus::Optimal);
    if excess > 0 {
        out.insight(format!(
            "📦 {excess} üründe stok optimal seviyenin {} katını aşıyor",
            fixed(t.overstock_ratio, 1)
        ));
        out.recommend("Fazla stoklu ürünler için mağazalar arası transfer değerlendirin");
    }
    if critical > 0 {
        out.alert(format!(
            "🔴 {critical} üründe stok optimal seviyenin %{} altında",
            fixed(t.understock_ratio * 100.0, 0)
        ));
        out.recommend("Kritik düşük stoklu ürünler için acil sipariş verin");
    }
    if optimal > 0 {
        out.insight(format!("🟢 {optimal} ürün optimal stok aralığında"));
    }
    Ok(out)
}

fn optimization_summary(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let holding = sum(input.rows, "monthly_holding_cost_tl");
    let surplus: f64 = where_number(input.rows, "stock_difference", |d| d > 0.0)
        .iter()
        .map(|r| r.number_or_zero("stock_difference"))
        .sum();
    out.insight(format!("💰 Aylık toplam stok tutma maliyeti: {} TL", grouped(holding)));
    out.metric("items_reviewed", input.rows.len() as f64);
    out.metric("monthly_holding_cost", holding);
    out.metric("surplus_units", surplus);
    out.metric("avg_monthly_turnover", round1(mean_all(input.rows, "monthly_turnover")));
    Ok(out)
}

// ── Stock alerts ────────────────────────────────────────────────────

fn critical_stores(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let critical = input.tiers.rows_in(StoreStockStatus::Critical);
    let high = input.tiers.count(StoreStockStatus::HighRisk);
    if !critical.is_empty() {
        out.alert(format!("🚨 {} mağaza kritik stok durumunda", critical.len()));
        for row in critical.iter().take(LISTED) {
            out.insight(format!(
                "  • {}: {} ürün {} gün içinde tükenecek",
                row.require_text("store_name")?,
                row.require_text("critical_items")?,
                fixed(input.thresholds.inventory.imminent_days, 0)
            ));
        }
        out.recommend("Kritik durumdaki mağazalar için acil replenishment başlatın");
    }
    if high > 0 {
        out.alert(format!("🔴 {high} mağazada yüksek stok riski var"));
    }
    Ok(out)
}

fn out_of_stock(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let empty = sum(input.rows, "out_of_stock");
    if empty > 0.0 {
        out.insight(format!("🕳️ Toplam {} ürün stoksuz", grouped(empty)));
        out.recommend("Stoksuz ürünleri merkez depo ile kontrol edin");
    }
    Ok(out)
}

fn alerts_summary(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let value = sum(input.rows, "stock_value_tl");
    let normal = input.tiers.count(StoreStockStatus::Normal);
    out.insight(format!(
        "🏬 {} mağazanın {normal} tanesi normal durumda, toplam stok değeri {} TL",
        input.rows.len(),
        grouped(value)
    ));
    out.metric("stores", input.rows.len() as f64);
    out.metric("total_skus", sum(input.rows, "total_skus"));
    out.metric("out_of_stock", sum(input.rows, "out_of_stock"));
    out.metric("critical_items", sum(input.rows, "critical_items"));
    out.metric("stock_value", value);
    Ok(out)
}

// ── Allocation ──────────────────────────────────────────────────────

fn allocation_split(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let allocated = sum(input.rows, "ai_recommended_qty");
    out.insight(format!(
        "🎯 {} adet {} mağazaya talep skoruna göre dağıtıldı",
        grouped(allocated),
        input.rows.len()
    ));
    if let Some(top) = input.tiers.rows_in(AllocationReason::HighDemand).first() {
        out.insight(format!(
            "🏆 En yüksek pay: {} - {} adet",
            top.require_text("store_name")?,
            top.require_text("ai_recommended_qty")?
        ));
    }
    let low = input.tiers.count(AllocationReason::Low);
    if low > 0 {
        out.insight(format!("📉 {low} mağaza düşük talep bandında"));
    }
    out.metric("total_ai_allocation", allocated);
    out.metric("total_erp_allocation", sum(input.rows, "erp_suggested_qty"));
    Ok(out)
}

fn allocation_shifts(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let mut shifted: Vec<&Row> = where_number(input.rows, "difference", |d| d != 0.0);
    shifted.sort_by(|a, b| {
        b.number_or_zero("difference")
            .abs()
            .total_cmp(&a.number_or_zero("difference").abs())
    });
    for row in shifted.iter().take(LISTED) {
        let difference = row.require_number("difference")?;
        out.insight(format!(
            "  • {}: ERP'ye göre {}{} adet",
            row.require_text("store_name")?,
            if difference > 0.0 { "+" } else { "" },
            fixed(difference, 0)
        ));
    }
    Ok(out)
}

fn allocation_efficiency(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let ideal = input.thresholds.inventory.target_supply_days;
    let split = |units_column: &str| -> Vec<(f64, f64)> {
        input
            .rows
            .iter()
            .map(|r| {
                let units = r.number_or_zero(units_column);
                let days = days_of_supply(units, r.number_or_zero("avg_daily_sales_30d")).unwrap_or(0.0);
                (units, days)
            })
            .collect()
    };
    let reference = sum(input.rows, "ai_recommended_qty");
    let ai = efficiency_score(&split("ai_recommended_qty"), reference, ideal);
    let erp = efficiency_score(&split("erp_suggested_qty"), reference, ideal);

    out.insight(format!(
        "⚖️ Verimlilik skoru ({} günlük hedef stok): AI {} / ERP {}",
        fixed(ideal, 0),
        fixed(ai, 1),
        fixed(erp, 1)
    ));
    if ai > erp {
        out.recommend(format!(
            "AI dağıtımını uygulayın: verimlilik ERP'ye göre {} puan yüksek",
            fixed(ai - erp, 1)
        ));
    }
    out.metric("ai_efficiency_score", ai);
    out.metric("erp_efficiency_score", erp);
    Ok(out)
}

// ── Transfers ───────────────────────────────────────────────────────

fn transfer_plan(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let units = sum(input.rows, "suggested_transfer_qty");
    out.insight(format!(
        "🔄 {} transfer önerisi, toplam {} adet",
        input.rows.len(),
        grouped(units)
    ));
    let intercity = input.tiers.count(TransferType::InterCity);
    if intercity > 0 {
        out.insight(format!("🚚 {intercity} transfer şehirler arası (2-3 gün teslimat)"));
    }
    Ok(out)
}

fn transfer_priority(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let urgent = input.tiers.rows_in(TransferPriority::High);
    if urgent.is_empty() {
        return Ok(out);
    }
    out.alert(format!(
        "🔴 {} transfer yüksek öncelikli (hedef mağazada {} günden az stok)",
        urgent.len(),
        fixed(input.thresholds.inventory.critical_days, 0)
    ));
    for row in urgent.iter().take(LISTED) {
        out.insight(format!(
            "  • {} → {}: {} adet {}",
            row.require_text("from_store")?,
            row.require_text("to_store")?,
            row.require_text("suggested_transfer_qty")?,
            row.require_text("product_name")?
        ));
    }
    out.recommend("Yüksek öncelikli transferleri bugün sevk edin");
    Ok(out)
}

fn transfer_summary(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    out.metric("transfers", input.rows.len() as f64);
    out.metric("total_transfer_qty", sum(input.rows, "suggested_transfer_qty"));
    out.metric("high_priority", input.tiers.count(TransferPriority::High) as f64);
    out.metric("in_city", input.tiers.count(TransferType::InCity) as f64);
    Ok(out)
}
