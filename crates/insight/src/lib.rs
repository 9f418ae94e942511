//! Insight synthesis: turn a report's rows into ranked insights, alerts and
//! recommendations.
//!
//! [`analyze`] runs the rule set for a category over typed tier columns and
//! business thresholds; [`format`] packages the outcome with localized section
//! headers for the caller. [`prepare`] adds the derived allocation columns
//! before analysis.

pub mod allocation;
pub mod analyzer;
pub mod fmt;
pub mod formatter;
pub mod outcome;
pub mod rules;
pub mod thresholds;
pub mod tiers;

pub use allocation::prepare;
pub use analyzer::{analyze, analyze_with, no_data};
pub use formatter::{format, headers, render_text, Headers, Priority, QueryInterpretation, Report};
pub use outcome::{AnalysisOutcome, Findings, Limits};
pub use rules::{output_language, primary_measure, rule_set, Rule, RuleInput, RuleResult};
pub use thresholds::{ThresholdConfig, ThresholdError};
pub use tiers::{Tier, TierIndex};
