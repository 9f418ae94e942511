//! Rules that are not tied to one report shape: the numeric profile behind
//! predictive and anomaly questions, plus the entity-focus and concentration
//! rules appended to every category.

use atelier_core::Row;
use atelier_intent::{canonical_country, EntityKind, Language};

use super::{primary_measure, Rule, RuleInput, RuleResult};
use crate::fmt::{fixed, round1};
use crate::outcome::Findings;

pub(super) const PREDICTIVE: &[Rule] = &[
    Rule { name: "numeric_profile", run: numeric_profile },
    Rule { name: "profile_summary", run: profile_summary },
];

pub(super) const ANOMALY: &[Rule] = &[
    Rule { name: "numeric_profile", run: numeric_profile },
    Rule { name: "outliers", run: outliers },
];

pub(super) const SHARED: &[Rule] = &[
    Rule { name: "entity_focus", run: entity_focus },
    Rule { name: "concentration", run: concentration },
];

const PROFILE_COLUMNS: usize = 3;
const Z_LIMIT: f64 = 2.0;

/// Up to three numeric columns in first-row order, with their values.
///
/// A column qualifies when every present value parses as a number.
fn numeric_columns(rows: &[Row]) -> Vec<(String, Vec<f64>)> {
    let Some(first) = rows.first() else {
        return Vec::new();
    };

    let mut columns = Vec::new();
    for column in first.columns() {
        let mut values = Vec::with_capacity(rows.len());
        let mut numeric = true;
        for value in rows.iter().filter_map(|r| r.get(column)).filter(|v| !v.is_null()) {
            match value.as_f64() {
                Some(n) => values.push(n),
                None => {
                    numeric = false;
                    break;
                }
            }
        }
        if numeric && !values.is_empty() {
            columns.push((column.to_string(), values));
            if columns.len() == PROFILE_COLUMNS {
                break;
            }
        }
    }
    columns
}

fn numeric_profile(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    for (column, values) in numeric_columns(input.rows) {
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        out.insight(format!(
            "📊 {column}: mean {}, min {}, max {}",
            fixed(mean, 2),
            fixed(min, 2),
            fixed(max, 2)
        ));
    }
    Ok(out)
}

fn profile_summary(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    out.metric("rows_analyzed", input.rows.len() as f64);
    out.metric("numeric_columns", numeric_columns(input.rows).len() as f64);
    Ok(out)
}

fn outliers(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let mut flagged = 0usize;

    for (column, values) in numeric_columns(input.rows) {
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let std = (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n).sqrt();
        if std == 0.0 {
            continue;
        }
        let unusual = values.iter().filter(|v| ((*v - mean) / std).abs() > Z_LIMIT).count();
        if unusual > 0 {
            flagged += unusual;
            out.alert(format!("⚠️ {unusual} unusual values in {column} (|z| > 2)"));
        }
    }

    if flagged > 0 {
        out.recommend("Investigate flagged values before relying on averages");
    }
    out.metric("anomalies_flagged", flagged as f64);
    Ok(out)
}

// ── Shared ──────────────────────────────────────────────────────────

/// How a question entity is compared with a row column.
struct Focus {
    kind: EntityKind,
    column: &'static str,
    en: &'static str,
    tr: &'static str,
}

const FOCUSES: &[Focus] = &[
    Focus { kind: EntityKind::Country, column: "country", en: "country", tr: "ülke" },
    Focus { kind: EntityKind::Store, column: "store_id", en: "store", tr: "mağaza" },
    Focus { kind: EntityKind::SuitType, column: "suit_type", en: "suit type", tr: "takım türü" },
];

fn focus_targets(focus: &Focus, raw: &[&str]) -> Vec<String> {
    raw.iter()
        .map(|value| match focus.kind {
            EntityKind::Country => canonical_country(value)
                .map(str::to_string)
                .unwrap_or_else(|| value.to_string()),
            EntityKind::Store => value.to_uppercase(),
            _ => value.to_string(),
        })
        .collect()
}

fn row_matches(focus: &Focus, row: &Row, targets: &[String]) -> bool {
    let Some(cell) = row.get(focus.column).filter(|v| !v.is_null()) else {
        return false;
    };
    let cell = cell.to_string().to_lowercase();
    targets.iter().any(|target| {
        let target = target.to_lowercase();
        match focus.kind {
            EntityKind::SuitType => cell.contains(&target),
            _ => cell == target,
        }
    })
}

fn entity_focus(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let entities = &input.context.entities;

    for focus in FOCUSES {
        let Some(value) = entities.get(focus.kind) else {
            continue;
        };
        if !input.rows.iter().any(|r| r.get(focus.column).is_some()) {
            continue;
        }

        let targets = focus_targets(focus, &value.values());
        let matched = input.rows.iter().filter(|r| row_matches(focus, r, &targets)).count();
        let total = input.rows.len();
        let shown = targets.join(", ");
        out.insight(match input.language() {
            Language::English => {
                format!("🔎 {matched} of {total} rows match {} {shown}", focus.en)
            }
            Language::Turkish => {
                format!("🔎 {total} satırın {matched} tanesi {} {shown} ile eşleşiyor", focus.tr)
            }
        });
    }
    Ok(out)
}

const CONCENTRATION_MIN_ROWS: usize = 10;

fn concentration(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let Some(measure) = primary_measure(input.category) else {
        return Ok(out);
    };

    let mut values: Vec<f64> = input.rows.iter().filter_map(|r| r.number(measure)).collect();
    if values.len() < CONCENTRATION_MIN_ROWS {
        return Ok(out);
    }
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return Ok(out);
    }

    values.sort_by(|a, b| b.total_cmp(a));
    let top = (values.len() as f64 * 0.2).ceil() as usize;
    let share = values[..top].iter().sum::<f64>() / total * 100.0;

    out.insight(match input.language() {
        Language::English => format!(
            "📊 Top 20% of rows ({top}) hold {}% of {measure}",
            fixed(share, 1)
        ),
        Language::Turkish => format!(
            "📊 Satırların en iyi %20'si ({top}) {measure} toplamının %{}'ini oluşturuyor",
            fixed(share, 1)
        ),
    });
    out.metric("top_20_share", round1(share));
    Ok(out)
}
