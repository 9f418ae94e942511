//! Rule output and the capped outcome returned to callers.

use atelier_intent::Engine;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// What a single rule produced. Rules never share one of these; the analyzer
/// merges them in rule order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Findings {
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
    pub alerts: Vec<String>,
    pub metrics: IndexMap<String, f64>,
}

impl Findings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insight(&mut self, text: impl Into<String>) {
        self.insights.push(text.into());
    }

    pub fn recommend(&mut self, text: impl Into<String>) {
        self.recommendations.push(text.into());
    }

    pub fn alert(&mut self, text: impl Into<String>) {
        self.alerts.push(text.into());
    }

    pub fn metric(&mut self, name: &str, value: f64) {
        self.metrics.insert(name.to_string(), value);
    }

    pub fn is_empty(&self) -> bool {
        self.insights.is_empty()
            && self.recommendations.is_empty()
            && self.alerts.is_empty()
            && self.metrics.is_empty()
    }

    /// Append `other` after everything already collected. Later metric values
    /// replace earlier ones under the same name.
    pub fn merge(&mut self, other: Findings) {
        self.insights.extend(other.insights);
        self.recommendations.extend(other.recommendations);
        self.alerts.extend(other.alerts);
        self.metrics.extend(other.metrics);
    }
}

/// Maximum list lengths for one engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub insights: usize,
    pub recommendations: usize,
    pub alerts: usize,
}

impl Limits {
    pub const MAX_INSIGHTS: usize = 15;
    pub const MAX_ALERTS: usize = 5;

    pub fn for_engine(engine: Engine) -> Self {
        let recommendations = match engine {
            Engine::FormalWear => 8,
            Engine::FranchiseOps | Engine::StorePerformance | Engine::Inventory => 5,
        };
        Self {
            insights: Self::MAX_INSIGHTS,
            recommendations,
            alerts: Self::MAX_ALERTS,
        }
    }
}

/// Final analysis for one request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
    pub alerts: Vec<String>,
    pub metrics_summary: IndexMap<String, f64>,
}

impl AnalysisOutcome {
    /// Cap every list to its limit, keeping the prefix in generation order.
    ///
    /// When `soft_alert` is present it is always kept as the last alert; rule
    /// alerts give up one slot for it.
    pub fn from_findings(findings: Findings, limits: Limits, soft_alert: Option<String>) -> Self {
        let Findings {
            mut insights,
            mut recommendations,
            mut alerts,
            metrics,
        } = findings;

        insights.truncate(limits.insights);
        recommendations.truncate(limits.recommendations);
        match soft_alert {
            Some(alert) => {
                alerts.truncate(limits.alerts.saturating_sub(1));
                alerts.push(alert);
            }
            None => alerts.truncate(limits.alerts),
        }

        Self {
            insights,
            recommendations,
            alerts,
            metrics_summary: metrics,
        }
    }
}
