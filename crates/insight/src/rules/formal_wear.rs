//! Formal-wear rules: suit sales, bundles, size and fit, seasonal demand and
//! cross-dimensional store health. Output is English.

use std::collections::HashMap;

use atelier_core::Row;

use super::{distinct_count, distinct_required, group_by, max_by, mean_all, sum, where_number, Rule, RuleInput, RuleResult};
use crate::fmt::{fixed, grouped, mean, round1};
use crate::outcome::Findings;
use crate::tiers::formal_wear::*;

pub(super) const SUIT_SALES: &[Rule] = &[
    Rule { name: "star_performer", run: star_performer },
    Rule { name: "critical_fit", run: critical_fit },
    Rule { name: "critical_alteration", run: critical_alteration },
    Rule { name: "low_bundle_attach", run: low_bundle_attach },
    Rule { name: "suit_summary", run: suit_summary },
    Rule { name: "country_breakdown", run: country_breakdown },
    Rule { name: "top_improvement", run: top_improvement },
];

pub(super) const BUNDLE_ANALYSIS: &[Rule] = &[
    Rule { name: "bundle_superstars", run: bundle_superstars },
    Rule { name: "ultra_value", run: ultra_value },
    Rule { name: "universal_appeal", run: universal_appeal },
    Rule { name: "bundle_margin", run: bundle_margin },
    Rule { name: "bundle_summary", run: bundle_summary },
    Rule { name: "most_effective_bundle", run: most_effective_bundle },
];

pub(super) const SIZE_ANALYSIS: &[Rule] = &[
    Rule { name: "perfect_matches", run: perfect_matches },
    Rule { name: "critical_fit_sizes", run: critical_fit_sizes },
    Rule { name: "high_return_risk", run: high_return_risk },
    Rule { name: "satisfaction", run: satisfaction },
    Rule { name: "critical_alteration_sizes", run: critical_alteration_sizes },
    Rule { name: "size_summary", run: size_summary },
    Rule { name: "body_type_breakdown", run: body_type_breakdown },
];

pub(super) const SEASONAL_TRENDS: &[Rule] = &[
    Rule { name: "explosive_demand", run: explosive_demand },
    Rule { name: "market_types", run: market_types },
    Rule { name: "fashion_diversity", run: fashion_diversity },
    Rule { name: "volatile_segments", run: volatile_segments },
    Rule { name: "event_driven", run: event_driven },
    Rule { name: "trend_summary", run: trend_summary },
    Rule { name: "trending_styles", run: trending_styles },
];

pub(super) const CROSS_ANALYSIS: &[Rule] = &[
    Rule { name: "excellence", run: excellence },
    Rule { name: "high_complexity", run: high_complexity },
    Rule { name: "store_health", run: store_health },
    Rule { name: "cross_summary", run: cross_summary },
];

// ── Suit sales ──────────────────────────────────────────────────────

fn star_performer(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    if let Some(top) = input.tiers.rows_in(PerformanceTier::StarPerformer).first() {
        out.insight(format!(
            "⭐ Star performer: {} - {} (Revenue: ${}, Margin: {}%)",
            top.require_text("store_id")?,
            top.require_text("suit_type")?,
            grouped(top.require_number("gross_revenue")?),
            top.require_text("avg_margin_pct")?,
        ));
    }
    Ok(out)
}

fn critical_fit(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let problems = input.tiers.rows_in(FitQuality::CriticalFitProblem);
    if !problems.is_empty() {
        let suit_types = distinct_required(problems, "suit_type")?;
        out.alert(format!("🔴 Critical fit issues in: {}", suit_types.join(", ")));
        out.recommend("Conduct urgent fit review for problematic categories");
    }
    Ok(out)
}

/// Rows above the critical alteration rate, plus the dimension to name in
/// the sizing recommendation.
fn over_critical_alteration<'r>(input: &RuleInput<'r>) -> Vec<&'r Row> {
    let critical = input.thresholds.formal_wear.alteration_rate_critical;
    where_number(input.rows, "alteration_rate", |rate| rate > critical)
}

fn critical_alteration(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let affected = over_critical_alteration(input);
    if affected.is_empty() {
        return Ok(out);
    }

    out.alert(format!(
        "🔴 {} of {} rows exceed critical alteration rate (>{}%)",
        affected.len(),
        input.rows.len(),
        fixed(input.thresholds.formal_wear.alteration_rate_critical, 1),
    ));

    let countries = present_texts(&affected, "country");
    let target = if !countries.is_empty() {
        format!("{} market", countries.join(", "))
    } else {
        let stores = present_texts(&affected, "store_id");
        if stores.is_empty() {
            "affected".to_string()
        } else {
            format!("{} stores", stores.join(", "))
        }
    };
    out.recommend(format!("Review sizing standards for {target}"));
    Ok(out)
}

fn low_bundle_attach(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let t = &input.thresholds.formal_wear;
    let minimum = t.bundle_attach_minimum;
    let excellent = t.bundle_attach_excellent;
    let strong = where_number(input.rows, "bundle_attach_rate", |rate| rate >= excellent);
    if !strong.is_empty() {
        out.insight(format!(
            "🎯 {} categories reach excellent bundle attachment (≥{}%)",
            strong.len(),
            fixed(excellent, 0)
        ));
    }
    let low = where_number(input.rows, "bundle_attach_rate", |rate| rate < minimum);
    if !low.is_empty() {
        out.insight(format!(
            "📉 {} categories show low bundle attachment (<{}%)",
            low.len(),
            fixed(minimum, 0)
        ));
        out.recommend("Develop targeted bundle promotions for low-attachment categories");
    }
    Ok(out)
}

fn suit_summary(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    out.metric("total_revenue", sum(input.rows, "gross_revenue"));
    out.metric("total_units", sum(input.rows, "units_sold"));
    out.metric("average_margin", round1(mean_all(input.rows, "avg_margin_pct")));
    out.metric("star_performers", input.tiers.count(PerformanceTier::StarPerformer) as f64);
    out.metric("fit_issues", input.tiers.count(FitQuality::CriticalFitProblem) as f64);
    out.metric("countries_analyzed", distinct_count(input.rows, "country") as f64);
    Ok(out)
}

fn country_breakdown(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let by_country: Vec<(String, Vec<&Row>)> = group_by(input.rows, "country", "")
        .into_iter()
        .filter(|(country, _)| !country.is_empty())
        .collect();
    if by_country.is_empty() {
        return Ok(out);
    }

    let mut top: Option<(&str, f64)> = None;
    for (country, rows) in &by_country {
        let revenue = sum(rows.iter().copied(), "gross_revenue");
        if top.map_or(true, |(_, best)| revenue > best) {
            top = Some((country.as_str(), revenue));
        }
    }
    if let Some((country, revenue)) = top {
        out.insight(format!("🌍 Top market: {country} with ${} revenue", grouped(revenue)));
    }

    let premium = input.thresholds.formal_wear.margin_premium;
    for (country, rows) in &by_country {
        let margin = sum(rows.iter().copied(), "avg_margin_pct") / rows.len() as f64;
        if margin >= premium {
            out.insight(format!(
                "💎 {country} shows premium margin performance ({}%)",
                fixed(margin, 1)
            ));
        }
    }
    Ok(out)
}

fn top_improvement(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let threshold = input.thresholds.formal_wear.improvement_opportunity;
    let candidates = where_number(input.rows, "improvement_opportunity_score", |s| s > threshold);
    if let Some(top) = max_by(&candidates, "improvement_opportunity_score") {
        out.recommend(format!(
            "🎯 Priority improvement: {} - {} (Opportunity score: {})",
            top.require_text("store_id")?,
            top.require_text("suit_type")?,
            top.require_text("improvement_opportunity_score")?,
        ));
    }
    Ok(out)
}

// ── Bundles ─────────────────────────────────────────────────────────

fn bundle_superstars(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let stars = input.tiers.rows_in(BundleStatus::BundleSuperstar);
    if stars.is_empty() {
        return Ok(out);
    }
    out.insight(format!("⭐ {} bundle superstars identified", stars.len()));
    for star in stars.iter().take(3) {
        out.insight(format!(
            "  • {} at {} (Score: {})",
            star.require_text("bundle_type")?,
            star.require_text("store_id")?,
            fixed(star.number_or_zero("bundle_effectiveness_score"), 1),
        ));
    }
    Ok(out)
}

fn ultra_value(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let ultra = input.tiers.rows_in(ValueTier::UltraValue);
    if !ultra.is_empty() {
        let savings = sum(ultra, "customer_value_created");
        out.insight(format!(
            "🎁 Ultra value bundles created ${} in customer savings",
            grouped(savings)
        ));
    }
    Ok(out)
}

fn universal_appeal(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let universal = input.tiers.count(MarketCoverage::UniversalAppeal);
    if universal > 0 {
        out.insight(format!(
            "🌟 {universal} bundles have universal market appeal (4+ segments)"
        ));
    }
    Ok(out)
}

fn bundle_margin(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let t = &input.thresholds.formal_wear;
    let high = where_number(input.rows, "margin_pct", |m| m >= t.bundle_margin_high);
    let low = where_number(input.rows, "margin_pct", |m| m < t.bundle_margin_low);
    if !high.is_empty() {
        out.insight(format!(
            "💎 {} bundles operate at {}%+ margin",
            high.len(),
            fixed(t.bundle_margin_high, 0)
        ));
    }
    if !low.is_empty() {
        out.alert(format!(
            "⚠️ {} bundles have margin below {}%",
            low.len(),
            fixed(t.bundle_margin_low, 0)
        ));
        out.recommend("Review pricing strategy for low-margin bundles");
    }
    Ok(out)
}

fn bundle_summary(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let high_margin = input.thresholds.formal_wear.bundle_margin_high;
    out.metric("total_bundles", input.rows.len() as f64);
    out.metric("superstars", input.tiers.count(BundleStatus::BundleSuperstar) as f64);
    out.metric(
        "high_margin_bundles",
        where_number(input.rows, "margin_pct", |m| m >= high_margin).len() as f64,
    );
    out.metric("universal_appeal", input.tiers.count(MarketCoverage::UniversalAppeal) as f64);
    Ok(out)
}

fn most_effective_bundle(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let best = input.thresholds.formal_wear.bundle_effectiveness_best;
    let effective = where_number(input.rows, "bundle_effectiveness_score", |s| s > best);
    if let Some(top) = max_by(&effective, "bundle_effectiveness_score") {
        out.insight(format!(
            "🏆 Most effective bundle: {} (Score: {}/100)",
            top.require_text("bundle_type")?,
            fixed(top.require_number("bundle_effectiveness_score")?, 1),
        ));
    }
    Ok(out)
}

// ── Size and fit ────────────────────────────────────────────────────

fn perfect_matches(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let matches = input.tiers.rows_in(DemandStatus::PerfectMatch);
    if matches.is_empty() {
        return Ok(out);
    }
    out.insight("🌟 Perfect size matches found:");
    for m in matches.iter().take(3) {
        out.insight(format!(
            "  • Size {} {} (Score: {})",
            m.require_text("size")?,
            m.require_text("fit_type")?,
            fixed(m.number_or_zero("size_quality_score"), 1),
        ));
    }
    Ok(out)
}

fn size_fit_label(row: &Row) -> Result<String, atelier_core::FieldError> {
    Ok(format!("{}-{}", row.require_text("size")?, row.require_text("fit_type")?))
}

fn critical_fit_sizes(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let critical = input.tiers.rows_in(FitAssessment::CriticalFitIssues);
    if !critical.is_empty() {
        let labels = critical
            .iter()
            .take(5)
            .map(|r| size_fit_label(r))
            .collect::<Result<Vec<_>, _>>()?;
        out.alert(format!("🔴 Critical fit issues: {}", labels.join(", ")));
        out.recommend("Urgent pattern review needed for problematic sizes");
    }
    Ok(out)
}

fn high_return_risk(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let risky = input.tiers.rows_in(ReturnRisk::HighReturnRisk);
    if !risky.is_empty() {
        let returns = sum(risky, "total_returns");
        out.alert(format!(
            "🔴 High return risk: {} returns from problematic sizes",
            grouped(returns)
        ));
        out.recommend("Implement enhanced size guides and virtual fitting");
    }
    Ok(out)
}

fn satisfaction(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let exceptional = input.tiers.count(SatisfactionTier::ExceptionalSatisfaction);
    let low = input.tiers.count(SatisfactionTier::LowSatisfaction);
    if exceptional > 0 {
        out.insight(format!(
            "⭐ {exceptional} size/fit combinations show exceptional satisfaction"
        ));
    }
    if low > 0 {
        out.alert(format!("📉 {low} size/fit combinations have low satisfaction"));
        out.recommend("Customer feedback review for low-satisfaction sizes");
    }
    Ok(out)
}

fn critical_alteration_sizes(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let affected = over_critical_alteration(input);
    if affected.is_empty() {
        return Ok(out);
    }
    out.alert(format!(
        "🔴 {} of {} size/fit combinations exceed critical alteration rate (>{}%)",
        affected.len(),
        input.rows.len(),
        fixed(input.thresholds.formal_wear.alteration_rate_critical, 1),
    ));
    let sizes = present_texts(&affected, "size");
    if sizes.is_empty() {
        out.recommend("Review sizing standards for affected sizes");
    } else {
        out.recommend(format!("Review sizing standards for sizes {}", sizes.join(", ")));
    }
    Ok(out)
}

fn size_summary(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    out.metric("perfect_matches", input.tiers.count(DemandStatus::PerfectMatch) as f64);
    out.metric("critical_fit_issues", input.tiers.count(FitAssessment::CriticalFitIssues) as f64);
    out.metric("high_return_risk", input.tiers.count(ReturnRisk::HighReturnRisk) as f64);
    out.metric(
        "body_types_analyzed",
        group_by(input.rows, "typical_body_type", "Unknown").len() as f64,
    );
    Ok(out)
}

fn body_type_breakdown(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let min_size = input.thresholds.formal_wear.min_group_size;
    for (body_type, rows) in group_by(input.rows, "typical_body_type", "Unknown") {
        if rows.len() < min_size {
            continue;
        }
        let alteration = sum(rows.iter().copied(), "alteration_rate") / rows.len() as f64;
        out.insight(format!(
            "👤 {body_type}: {} sizes, {}% alteration rate",
            rows.len(),
            fixed(alteration, 1)
        ));
    }
    Ok(out)
}

// ── Seasonal trends ─────────────────────────────────────────────────

fn explosive_demand(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let explosive = input.tiers.rows_in(DemandLevel::ExplosiveDemand);
    if explosive.is_empty() {
        return Ok(out);
    }
    out.insight("🚀 Explosive demand detected:");
    for item in explosive.iter().take(3) {
        out.insight(format!(
            "  • {} in {} (Index: {})",
            item.require_text("occasion_type")?,
            item.require_text("country")?,
            item.require_text("avg_demand_index")?,
        ));
    }
    out.recommend("Maximize inventory for explosive demand categories");
    Ok(out)
}

fn market_types(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let premium = input.tiers.rows_in(MarketType::PremiumMarket);
    let sensitive = input.tiers.rows_in(MarketType::PriceSensitive);
    if !premium.is_empty() {
        let countries = distinct_required(premium, "country")?;
        out.insight(format!("💎 Premium markets: {}", countries.join(", ")));
        out.recommend("Focus on quality and exclusivity in premium markets");
    }
    if !sensitive.is_empty() {
        let countries = distinct_required(sensitive, "country")?;
        out.insight(format!("💸 Price-sensitive markets: {}", countries.join(", ")));
        out.recommend("Develop value bundles for price-sensitive segments");
    }
    Ok(out)
}

fn fashion_diversity(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let diverse = input.tiers.count(ProductDiversity::HighFashionDiversity);
    if diverse > 0 {
        out.insight(format!("🎨 {diverse} categories show high fashion diversity"));
    }
    Ok(out)
}

fn volatile_segments(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let volatile = input.tiers.count(MarketStability::Volatile);
    if volatile > 0 {
        out.alert(format!("⚡ {volatile} volatile market segments detected"));
        out.recommend("Implement flexible inventory strategies for volatile segments");
    }
    Ok(out)
}

fn event_driven(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let events = input.tiers.count(EventInfluence::EventDriven);
    if events > 0 {
        out.insight(format!("🎉 {events} categories are event-driven"));
        out.recommend("Align marketing campaigns with cultural events");
    }
    Ok(out)
}

fn trend_summary(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    out.metric("explosive_demand", input.tiers.count(DemandLevel::ExplosiveDemand) as f64);
    out.metric("premium_markets", input.tiers.count(MarketType::PremiumMarket) as f64);
    out.metric("price_sensitive", input.tiers.count(MarketType::PriceSensitive) as f64);
    out.metric("event_driven", input.tiers.count(EventInfluence::EventDriven) as f64);
    Ok(out)
}

/// Three most frequent entries across `", "`-separated lists; ties keep the
/// order in which entries were first seen.
fn most_common(rows: &[Row], column: &str) -> Vec<String> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    for list in rows.iter().filter_map(|r| r.text(column)) {
        for item in list.split(", ").map(str::trim).filter(|s| !s.is_empty()) {
            let count = counts.entry(item.to_string()).or_insert(0);
            if *count == 0 {
                order.push(item.to_string());
            }
            *count += 1;
        }
    }
    // stable sort keeps first-seen order among equal counts
    order.sort_by(|a, b| counts[b].cmp(&counts[a]));
    order.truncate(3);
    order
}

fn trending_styles(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let colors = most_common(input.rows, "trending_colors");
    if !colors.is_empty() {
        out.insight(format!("🎨 Trending colors: {}", colors.join(", ")));
    }
    let fabrics = most_common(input.rows, "trending_fabrics");
    if !fabrics.is_empty() {
        out.insight(format!("🧵 Trending fabrics: {}", fabrics.join(", ")));
    }
    Ok(out)
}

// ── Cross-dimensional ───────────────────────────────────────────────

fn excellence(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let excellent = input.tiers.rows_in(OverallPerformance::Excellence);
    if excellent.is_empty() {
        return Ok(out);
    }
    out.insight(format!("⭐ {} stores showing excellence", excellent.len()));
    for store in excellent.iter().take(3) {
        out.insight(format!(
            "  • {} (Health Score: {})",
            store.require_text("store_id")?,
            fixed(store.number_or_zero("store_health_score"), 1),
        ));
    }
    Ok(out)
}

fn high_complexity(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let complex = input.tiers.count(OperationalComplexity::HighComplexity);
    if complex > 0 {
        out.insight(format!("🌈 {complex} stores manage high complexity operations"));
        out.recommend("Provide additional support for high-complexity stores");
    }
    Ok(out)
}

fn store_health(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let average = mean_all(input.rows, "store_health_score");
    out.insight(format!("📊 Average store health score: {}/100", fixed(average, 1)));

    let low_mark = input.thresholds.formal_wear.store_health_low;
    let low = where_number(input.rows, "store_health_score", |s| s < low_mark);
    if !low.is_empty() {
        out.alert(format!(
            "🔴 {} stores have health scores below {}",
            low.len(),
            fixed(low_mark, 0)
        ));
        out.recommend("Immediate intervention needed for low-health stores");
    }
    Ok(out)
}

fn cross_summary(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let health: Vec<f64> = input.rows.iter().map(|r| r.number_or_zero("store_health_score")).collect();
    out.metric("stores_analyzed", input.rows.len() as f64);
    out.metric("excellence_stores", input.tiers.count(OverallPerformance::Excellence) as f64);
    out.metric("average_health_score", round1(mean(&health).unwrap_or(0.0)));
    Ok(out)
}

// ── Helpers ─────────────────────────────────────────────────────────

/// Distinct present text values, first-seen order. Missing values are skipped.
fn present_texts(rows: &[&Row], column: &str) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in rows.iter().filter_map(|r| r.get(column)).filter(|v| !v.is_null()) {
        let value = value.to_string();
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}
