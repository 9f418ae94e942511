//! Response Formatter: package an [`AnalysisOutcome`] for the caller, with
//! section headers in the question's language.

use atelier_intent::{Category, Entities, Language, QueryContext};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::fmt::{fixed, grouped};
use crate::outcome::AnalysisOutcome;

/// Minimum confidence for the executive summary line.
pub const SUMMARY_MIN_CONFIDENCE: f64 = 0.7;

// ── Headers ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Headers {
    pub executive_summary: &'static str,
    pub insights: &'static str,
    pub recommendations: &'static str,
    pub alerts: &'static str,
    pub metrics: &'static str,
    pub next_steps: &'static str,
    /// Prefix of the alert listing rules that failed.
    pub partial_analysis: &'static str,
}

const HEADERS: &[(&str, Headers)] = &[
    (
        "tr",
        Headers {
            executive_summary: "🎯 YÖNETİCİ ÖZETİ",
            insights: "📊 ANA BULGULAR",
            recommendations: "💡 ÖNERİLER",
            alerts: "⚠️ UYARILAR",
            metrics: "📈 METRİKLER",
            next_steps: "➡️ SONRAKİ ADIMLAR",
            partial_analysis: "Analiz kısmen tamamlandı",
        },
    ),
    (
        "en",
        Headers {
            executive_summary: "🎯 EXECUTIVE SUMMARY",
            insights: "📊 KEY FINDINGS",
            recommendations: "💡 RECOMMENDATIONS",
            alerts: "⚠️ ALERTS",
            metrics: "📈 METRICS",
            next_steps: "➡️ NEXT STEPS",
            partial_analysis: "Analysis partially completed",
        },
    ),
];

const FALLBACK_LANGUAGE: &str = "en";

/// Header table for a language code; unknown codes get the English table.
pub fn headers(code: &str) -> Headers {
    let find = |wanted: &str| HEADERS.iter().find(|(c, _)| *c == wanted).map(|(_, h)| *h);
    find(code)
        .or_else(|| find(FALLBACK_LANGUAGE))
        .unwrap_or(HEADERS[HEADERS.len() - 1].1)
}

// ── Priorities ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// First two recommendations are high priority, the next three medium.
    pub fn for_position(index: usize) -> Self {
        match index {
            0..=1 => Priority::High,
            2..=4 => Priority::Medium,
            _ => Priority::Low,
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            Priority::High => "🔴",
            Priority::Medium => "🟡",
            Priority::Low => "🟢",
        }
    }
}

// ── Report ──────────────────────────────────────────────────────────

/// How the question was understood.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryInterpretation {
    pub detected_intent: Category,
    pub detected_entities: Entities,
    pub language: Language,
}

/// Caller-facing analysis payload.
///
/// Each block is its header followed by the items, or empty when there are
/// no items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub executive_summary: String,
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
    pub alerts: Vec<String>,
    pub metrics_summary: IndexMap<String, f64>,
    pub confidence_score: f64,
    pub suggested_queries: Vec<String>,
    pub query_interpretation: QueryInterpretation,
}

fn block(header: &str, items: impl IntoIterator<Item = String>) -> Vec<String> {
    let items: Vec<String> = items.into_iter().collect();
    if items.is_empty() {
        return items;
    }
    std::iter::once(header.to_string()).chain(items).collect()
}

fn executive_summary(outcome: &AnalysisOutcome, context: &QueryContext, headers: &Headers) -> String {
    let metrics = &outcome.metrics_summary;
    if context.confidence < SUMMARY_MIN_CONFIDENCE || metrics.is_empty() {
        return String::new();
    }

    let turkish = context.detected_language == Language::Turkish;
    let mut parts = vec![headers.executive_summary.to_string()];
    if let Some(revenue) = metrics.get("total_revenue") {
        parts.push(if turkish {
            format!("Toplam Gelir: {} TL", grouped(*revenue))
        } else {
            format!("Total Revenue: ${}", grouped(*revenue))
        });
    }
    if let Some(units) = metrics.get("total_units") {
        parts.push(if turkish {
            format!("Satılan Adet: {}", grouped(*units))
        } else {
            format!("Units Sold: {}", grouped(*units))
        });
    }
    if let Some(margin) = metrics.get("average_margin") {
        parts.push(if turkish {
            format!("Ortalama Kar Marjı: %{}", fixed(*margin, 1))
        } else {
            format!("Average Margin: {}%", fixed(*margin, 1))
        });
    }
    parts.join(" | ")
}

/// Build the caller-facing report. Strings from `outcome` are kept verbatim;
/// recommendations only gain a priority marker.
pub fn format(outcome: &AnalysisOutcome, context: &QueryContext) -> Report {
    let headers = headers(context.detected_language.code());

    let recommendations = outcome
        .recommendations
        .iter()
        .enumerate()
        .map(|(i, rec)| format!("{} {rec}", Priority::for_position(i).marker()));

    Report {
        executive_summary: executive_summary(outcome, context, &headers),
        insights: block(headers.insights, outcome.insights.iter().cloned()),
        recommendations: block(headers.recommendations, recommendations),
        alerts: block(headers.alerts, outcome.alerts.iter().cloned()),
        metrics_summary: outcome.metrics_summary.clone(),
        confidence_score: context.confidence,
        suggested_queries: context.suggested_followups.clone(),
        query_interpretation: QueryInterpretation {
            detected_intent: context.detected_category,
            detected_entities: context.entities.clone(),
            language: context.detected_language,
        },
    }
}

/// Plain-text rendering for terminals.
pub fn render_text(report: &Report) -> String {
    let headers = headers(report.query_interpretation.language.code());
    let mut sections: Vec<String> = Vec::new();

    if !report.executive_summary.is_empty() {
        sections.push(report.executive_summary.clone());
    }
    for section in [&report.insights, &report.recommendations, &report.alerts] {
        if !section.is_empty() {
            sections.push(section.join("\n"));
        }
    }
    if !report.metrics_summary.is_empty() {
        let lines = report
            .metrics_summary
            .iter()
            .map(|(name, value)| format!("  {name}: {value}"));
        sections.push(block(headers.metrics, lines).join("\n"));
    }
    if !report.suggested_queries.is_empty() {
        let lines = report.suggested_queries.iter().map(|q| format!("  • {q}"));
        sections.push(block(headers.next_steps, lines).join("\n"));
    }
    sections.join("\n\n")
}
