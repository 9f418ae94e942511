//! Result Analyzer: run a category's rule set over a row set and cap the
//! merged findings.

use atelier_core::Row;
use atelier_intent::{Category, Language, QueryContext};
use tracing::{debug, warn};

use crate::formatter::headers;
use crate::outcome::{AnalysisOutcome, Findings, Limits};
use crate::rules::{output_language, rule_set, Rule, RuleInput};
use crate::thresholds::ThresholdConfig;
use crate::tiers::TierIndex;

/// Outcome for an empty row set, worded in the question's language.
pub fn no_data(language: Language) -> AnalysisOutcome {
    let (insight, recommendation) = match language {
        Language::Turkish => (
            "Belirtilen kriterlere uygun veri bulunamadı",
            "Tarih aralığını genişletmeyi deneyin",
        ),
        Language::English => (
            "No data found matching the specified criteria",
            "Try broadening the date range",
        ),
    };
    AnalysisOutcome {
        insights: vec![insight.to_string()],
        recommendations: vec![recommendation.to_string()],
        ..Default::default()
    }
}

/// Analyze `rows` as a `category` report.
///
/// Every rule runs even when an earlier one fails. Failed rules contribute
/// nothing and are summarised in a single trailing alert.
pub fn analyze(
    rows: &[Row],
    category: Category,
    context: &QueryContext,
    thresholds: &ThresholdConfig,
) -> AnalysisOutcome {
    analyze_with(rows, category, &rule_set(category), context, thresholds)
}

/// [`analyze`] with an explicit rule list.
pub fn analyze_with(
    rows: &[Row],
    category: Category,
    rules: &[Rule],
    context: &QueryContext,
    thresholds: &ThresholdConfig,
) -> AnalysisOutcome {
    if rows.is_empty() {
        debug!(query_type = %category, "no rows to analyze");
        return no_data(context.detected_language);
    }

    let tiers = TierIndex::new(rows);
    let input = RuleInput {
        rows,
        tiers: &tiers,
        category,
        context,
        thresholds,
    };

    let mut findings = Findings::new();
    let mut failures: Vec<String> = Vec::new();
    for rule in rules {
        match (rule.run)(&input) {
            Ok(partial) => findings.merge(partial),
            Err(e) => {
                warn!(rule = rule.name, query_type = %category, error = %e, "rule failed");
                failures.push(format!("{}: {}", rule.name, e));
            }
        }
    }

    let soft_alert = (!failures.is_empty()).then(|| {
        let prefix = headers(output_language(category.engine()).code()).partial_analysis;
        format!("{prefix}: {}", failures.join("; "))
    });

    let outcome = AnalysisOutcome::from_findings(findings, Limits::for_engine(category.engine()), soft_alert);
    debug!(
        query_type = %category,
        rows = rows.len(),
        insights = outcome.insights.len(),
        recommendations = outcome.recommendations.len(),
        alerts = outcome.alerts.len(),
        failed_rules = failures.len(),
        "analysis complete"
    );
    outcome
}
