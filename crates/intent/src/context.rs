//! [`QueryContext`]: everything downstream needs to know about one question.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::category::{Category, Engine};
use crate::classifier::{classify, Classification};
use crate::entities::{extract, Entities};
use crate::language::Language;
use crate::patterns::Registry;
use crate::suggestions::followups;

/// Classification, entities, language and follow-ups for a single request.
/// Built once and only read afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryContext {
    pub original_text: String,
    pub engine: Engine,
    pub detected_category: Category,
    pub confidence: f64,
    pub entities: Entities,
    pub detected_language: Language,
    pub suggested_followups: Vec<String>,
    /// True when the category came from a caller override rather than detection.
    #[serde(default)]
    pub overridden: bool,
}

impl QueryContext {
    /// Classify `text` with `registry`, honouring `category_override` when it
    /// names a category of the registry's engine.
    ///
    /// An override that does not resolve is dropped and detection runs as usual.
    pub fn build(registry: &Registry, text: &str, category_override: Option<&str>) -> Self {
        let engine = registry.engine();
        let forced = category_override.and_then(|raw| {
            let resolved = Category::parse(raw).filter(|c| registry.patterns().contains(*c));
            if resolved.is_none() {
                debug!(engine = %engine, query_type = raw, "ignoring unknown category override");
            }
            resolved
        });

        let (category, confidence, overridden) = match forced {
            Some(category) => (category, 1.0, true),
            None => {
                let Classification {
                    category, confidence, ..
                } = classify(text, registry.patterns());
                (category, confidence, false)
            }
        };

        let ctx = Self {
            original_text: text.to_string(),
            engine,
            detected_category: category,
            confidence,
            entities: extract(text, registry.entities()),
            detected_language: Language::detect(text),
            suggested_followups: followups(category),
            overridden,
        };

        debug!(
            engine = %engine,
            query_type = %ctx.detected_category,
            confidence = ctx.confidence,
            entities = ctx.entities.len(),
            language = %ctx.detected_language,
            "query context built"
        );

        ctx
    }
}
