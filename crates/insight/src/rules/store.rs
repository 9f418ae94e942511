//! Store-performance rules. Output is Turkish.

use atelier_core::{FieldError, Row};

use super::{distinct_count, group_by, mean_all, sum, where_number, Rule, RuleInput, RuleResult};
use crate::fmt::{fixed, grouped, round1};
use crate::outcome::Findings;
use crate::tiers::store::*;

pub(super) const DAILY_PERFORMANCE: &[Rule] = &[
    Rule { name: "day_leader", run: day_leader },
    Rule { name: "excellent_conversion", run: excellent_conversion },
    Rule { name: "week_over_week", run: week_over_week },
    Rule { name: "adverse_weather", run: adverse_weather },
    Rule { name: "suit_share", run: suit_share },
    Rule { name: "daily_summary", run: daily_summary },
];

pub(super) const STORE_COMPARISON: &[Rule] = &[
    Rule { name: "star_stores", run: star_stores },
    Rule { name: "country_revenue", run: country_revenue },
    Rule { name: "franchise_vs_owned", run: franchise_vs_owned },
    Rule { name: "most_productive", run: most_productive },
    Rule { name: "comparison_summary", run: comparison_summary },
];

pub(super) const STAFF_ANALYSIS: &[Rule] = &[
    Rule { name: "top_staff", run: top_staff },
    Rule { name: "below_hourly_target", run: below_hourly_target },
    Rule { name: "training_required", run: training_required },
    Rule { name: "role_breakdown", run: role_breakdown },
    Rule { name: "suit_specialists", run: suit_specialists },
    Rule { name: "staff_summary", run: staff_summary },
];

pub(super) const TRAFFIC_CONVERSION: &[Rule] = &[
    Rule { name: "converters", run: converters },
    Rule { name: "weekend_performers", run: weekend_performers },
    Rule { name: "weather_conversion", run: weather_conversion },
    Rule { name: "mall_capture", run: mall_capture },
    Rule { name: "traffic_summary", run: traffic_summary },
];

pub(super) const KPI_TRACKING: &[Rule] = &[
    Rule { name: "target_achievement", run: target_achievement },
    Rule { name: "kpi_trend", run: kpi_trend },
    Rule { name: "focus_areas", run: focus_areas },
    Rule { name: "kpi_summary", run: kpi_summary },
];

const ADVERSE_WEATHER: &[&str] = &["rain", "snow", "cold"];

// ── Daily performance ───────────────────────────────────────────────

fn day_leader(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let leader = input
        .rows
        .iter()
        .find(|r| r.number("daily_revenue_rank") == Some(1.0));
    if let Some(leader) = leader {
        out.insight(format!(
            "🏆 Günün lideri: {} - {} TL",
            leader.require_text("store_id")?,
            grouped(leader.require_number("net_revenue")?),
        ));
    }
    Ok(out)
}

fn excellent_conversion(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let excellent = input.tiers.count(ConversionStatus::Excellent);
    if excellent > 0 {
        out.insight(format!(
            "🎯 {excellent} mağaza mükemmel dönüşüm oranı (>%{}) yakaladı",
            fixed(input.thresholds.store.conversion_excellent, 0)
        ));
    }
    Ok(out)
}

fn week_over_week(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let swing = input.thresholds.store.week_over_week_swing;
    let up = where_number(input.rows, "week_over_week_change", |c| c > swing).len();
    let down = where_number(input.rows, "week_over_week_change", |c| c < -swing).len();
    if up > 0 {
        out.insight(format!(
            "📈 {up} mağaza geçen haftaya göre %{}+ büyüme gösterdi",
            fixed(swing, 0)
        ));
    }
    if down > 0 {
        out.alert(format!(
            "📉 {down} mağaza geçen haftaya göre %{}+ düşüş yaşadı",
            fixed(swing, 0)
        ));
    }
    Ok(out)
}

fn adverse_weather(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let affected = input
        .rows
        .iter()
        .filter_map(|r| r.text("weather_impact"))
        .filter(|w| ADVERSE_WEATHER.iter().any(|a| w.eq_ignore_ascii_case(a)))
        .count();
    if affected > 0 {
        out.insight(format!("🌧️ {affected} mağaza olumsuz hava koşullarından etkilendi"));
    }
    Ok(out)
}

fn suit_share(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let share = input.thresholds.store.suit_share;
    let heavy = where_number(input.rows, "suit_percentage", |p| p > share).len();
    if heavy > 0 {
        out.insight(format!(
            "🤵 {heavy} mağazada takım elbise satışları %{}+ pay aldı",
            fixed(share, 0)
        ));
        out.recommend("Yüksek takım elbise satışı olan mağazalara ek stok gönderin");
    }
    Ok(out)
}

fn daily_summary(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    out.metric("total_revenue", sum(input.rows, "net_revenue"));
    out.metric("total_transactions", sum(input.rows, "transactions"));
    out.metric("avg_conversion", round1(mean_all(input.rows, "conversion_rate")));
    out.metric("total_visitors", sum(input.rows, "store_entries"));
    out.metric("unique_stores", distinct_count(input.rows, "store_id") as f64);
    Ok(out)
}

// ── Store comparison ────────────────────────────────────────────────

fn star_stores(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let stars = input.tiers.rows_in(StoreCategory::StarStore);
    if !stars.is_empty() {
        let ids = stars
            .iter()
            .take(3)
            .map(|r| r.require_text("store_id"))
            .collect::<Result<Vec<_>, _>>()?;
        out.insight(format!("⭐ {} yıldız mağaza: {}", stars.len(), ids.join(", ")));
    }
    Ok(out)
}

fn country_revenue(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    for (country, rows) in group_by(input.rows, "country", "Unknown") {
        let average = sum(rows.iter().copied(), "total_revenue_30d") / rows.len() as f64;
        out.insight(format!(
            "🌍 {country} ortalama gelir: {} TL ({} mağaza)",
            grouped(average),
            rows.len()
        ));
    }
    Ok(out)
}

fn ownership_mean(rows: &[Row], flag: &str) -> Option<f64> {
    let group: Vec<&Row> = rows.iter().filter(|r| r.text("franchise_flag") == Some(flag)).collect();
    if group.is_empty() {
        None
    } else {
        Some(sum(group.iter().copied(), "total_revenue_30d") / group.len() as f64)
    }
}

fn franchise_vs_owned(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let (Some(franchise), Some(owned)) = (
        ownership_mean(input.rows, "franchise"),
        ownership_mean(input.rows, "owned"),
    ) else {
        return Ok(out);
    };

    if owned > franchise && franchise > 0.0 {
        out.insight(format!(
            "🏢 Şirket mağazaları %{} daha iyi performans gösteriyor",
            fixed((owned / franchise - 1.0) * 100.0, 0)
        ));
    } else if owned <= franchise && owned > 0.0 {
        out.insight(format!(
            "🤝 Franchise mağazalar %{} daha iyi performans gösteriyor",
            fixed((franchise / owned - 1.0) * 100.0, 0)
        ));
    }
    Ok(out)
}

fn most_productive(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let top_rank = input.thresholds.store.productivity_top_rank;
    let efficient = where_number(input.rows, "productivity_rank", |rank| rank <= top_rank);
    if !efficient.is_empty() {
        let parts = efficient
            .iter()
            .map(|r| -> Result<String, FieldError> {
                Ok(format!(
                    "{} ({} TL/saat)",
                    r.require_text("store_id")?,
                    fixed(r.require_number("revenue_per_staff_hour")?, 0)
                ))
            })
            .collect::<Result<Vec<_>, _>>()?;
        out.insight(format!("💪 En verimli mağazalar: {}", parts.join(", ")));
    }
    Ok(out)
}

fn comparison_summary(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let flagged = |flag: &str| {
        input
            .rows
            .iter()
            .filter(|r| r.text("franchise_flag") == Some(flag))
            .count() as f64
    };
    out.metric("total_stores", input.rows.len() as f64);
    out.metric("star_stores", input.tiers.count(StoreCategory::StarStore) as f64);
    out.metric("total_revenue_30d", sum(input.rows, "total_revenue_30d"));
    out.metric("avg_conversion", round1(mean_all(input.rows, "conversion_rate")));
    out.metric("franchise_count", flagged("franchise"));
    out.metric("owned_count", flagged("owned"));
    Ok(out)
}

// ── Staff ───────────────────────────────────────────────────────────

fn top_staff(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let top = input.tiers.rows_in(StaffTier::Top10);
    if top.is_empty() {
        return Ok(out);
    }
    out.insight(format!(
        "⭐ {} çalışan üst %10'luk dilimde performans gösteriyor",
        top.len()
    ));
    for person in top.iter().take(3) {
        out.insight(format!(
            "  • {}: {} TL/saat",
            person.require_text("employee_id")?,
            fixed(person.require_number("avg_sales_per_hour")?, 0),
        ));
    }
    Ok(out)
}

fn below_hourly_target(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let target = input.thresholds.store.sales_per_hour_target;
    let below = where_number(input.rows, "avg_sales_per_hour", |rate| rate < target);
    if !below.is_empty() {
        out.alert(format!(
            "⏳ {} çalışan saatlik satış hedefinin altında (<{} TL/saat)",
            below.len(),
            fixed(target, 0)
        ));
        out.recommend("Saatlik satışı hedefin altındaki personel için koçluk seansları planlayın");
    }
    Ok(out)
}

fn training_required(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let needed = input.tiers.count(TrainingStatus::TrainingRequired);
    if needed > 0 {
        out.alert(format!(
            "📚 {needed} çalışan için eğitim gerekli (skor < {})",
            input.thresholds.store.training_score_minimum
        ));
        out.recommend("Eğitim skorları düşük personel için acil eğitim planı oluşturun");
    }
    Ok(out)
}

fn role_breakdown(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    for (role, rows) in group_by(input.rows, "primary_role", "Unknown") {
        let average = sum(rows.iter().copied(), "avg_sales_per_hour") / rows.len() as f64;
        out.insight(format!(
            "👔 {role} ortalama: {} TL/saat ({} kişi)",
            fixed(average, 0),
            rows.len()
        ));
    }
    Ok(out)
}

fn suit_specialists(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let specialists = input.tiers.count(Specialty::SuitSpecialist);
    if specialists > 0 {
        out.insight(format!("🤵 {specialists} takım elbise uzmanı tespit edildi"));
    }
    Ok(out)
}

fn staff_summary(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    out.metric("total_employees", input.rows.len() as f64);
    out.metric("top_performers", input.tiers.count(StaffTier::Top10) as f64);
    out.metric("avg_sales_per_hour", round1(mean_all(input.rows, "avg_sales_per_hour")));
    out.metric("total_sales", sum(input.rows, "total_sales_value"));
    out.metric("training_required", input.tiers.count(TrainingStatus::TrainingRequired) as f64);
    Ok(out)
}

// ── Traffic and conversion ──────────────────────────────────────────

fn converters(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let t = &input.thresholds.store;
    let excellent = input.tiers.count(ConversionTier::Excellent);
    let poor = input.tiers.count(ConversionTier::Poor);
    if excellent > 0 {
        out.insight(format!(
            "🏆 {excellent} mağaza mükemmel dönüşüm oranına sahip (>%{})",
            fixed(t.conversion_excellent, 0)
        ));
    }
    if poor > 0 {
        out.alert(format!(
            "⚠️ {poor} mağaza düşük dönüşüm oranında (<%{})",
            fixed(t.conversion_poor, 0)
        ));
        out.recommend("Düşük dönüşümlü mağazalarda müşteri deneyimi denetimi yapın");
    }
    Ok(out)
}

fn weekend_performers(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let weekend = input.tiers.count(PerformancePattern::WeekendPerformer);
    if weekend > 0 {
        out.insight(format!("🎯 {weekend} mağaza hafta sonu güçlü performans gösteriyor"));
        out.recommend("Hafta sonu güçlü mağazalara ek personel atayın");
    }
    Ok(out)
}

fn weather_conversion(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let limit = input.thresholds.store.weather_conversion_impact;
    let affected = where_number(input.rows, "weather_impact", |w| w > limit).len();
    if affected > 0 {
        out.insight(format!(
            "🌤️ {affected} mağazada hava durumu dönüşümü %{}+ etkiliyor",
            fixed(limit, 0)
        ));
    }
    Ok(out)
}

fn mall_capture(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let limit = input.thresholds.store.mall_capture;
    let capturing = where_number(input.rows, "mall_capture_rate", |c| c > limit).len();
    if capturing > 0 {
        out.insight(format!(
            "🧲 {capturing} mağaza AVM trafiğinin %{}+'ını yakalıyor",
            fixed(limit, 0)
        ));
    }
    Ok(out)
}

fn traffic_summary(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    out.metric("total_stores", distinct_count(input.rows, "store_id") as f64);
    out.metric("excellent_converters", input.tiers.count(ConversionTier::Excellent) as f64);
    out.metric("poor_converters", input.tiers.count(ConversionTier::Poor) as f64);
    Ok(out)
}

// ── KPI tracking ────────────────────────────────────────────────────

fn target_achievement(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let t = &input.thresholds.store;
    let exceeding = input.tiers.count(PerformanceLevel::Exceeding);
    let missing = input.tiers.count(PerformanceLevel::Missing);
    if exceeding > 0 {
        out.insight(format!(
            "⭐ {exceeding} mağaza hedefleri aşıyor (>%{})",
            fixed(t.kpi_achievement_excellent, 0)
        ));
    }
    if missing > 0 {
        out.alert(format!(
            "🔴 {missing} mağaza hedefleri tutturamıyor (<%{})",
            fixed(t.kpi_achievement_poor, 0)
        ));
    }
    Ok(out)
}

fn kpi_trend(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let improving = input.tiers.count(TrendDirection::Improving);
    let declining = input.tiers.count(TrendDirection::Declining);
    if improving > 0 {
        out.insight(format!("📈 {improving} mağaza KPI performansı yükselişte"));
    }
    if declining > 0 {
        out.alert(format!("📉 {declining} mağaza KPI performansı düşüşte"));
    }
    Ok(out)
}

fn focus_areas(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let revenue = input.tiers.count(FocusArea::RevenueGeneration);
    let conversion = input.tiers.count(FocusArea::ConversionTactics);
    let basket = input.tiers.count(FocusArea::BasketValue);
    let formal = input.tiers.count(FocusArea::FormalWearSales);
    if revenue > 0 {
        out.recommend(format!("{revenue} mağaza için gelir artırıcı kampanyalar başlatın"));
    }
    if conversion > 0 {
        out.recommend(format!("{conversion} mağaza için dönüşüm optimizasyonu yapın"));
    }
    if basket > 0 {
        out.recommend(format!("{basket} mağaza için sepet değerini artıracak çapraz satış uygulayın"));
    }
    if formal > 0 {
        out.recommend(format!("{formal} mağaza için takım elbise satış odaklı aksiyonlar planlayın"));
    }
    Ok(out)
}

fn kpi_summary(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    out.metric("total_stores", distinct_count(input.rows, "store_id") as f64);
    out.metric("exceeding_targets", input.tiers.count(PerformanceLevel::Exceeding) as f64);
    out.metric("missing_targets", input.tiers.count(PerformanceLevel::Missing) as f64);
    Ok(out)
}
