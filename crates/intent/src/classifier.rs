//! Count-based intent classification over a [`PatternSet`].

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::patterns::PatternSet;

/// Score at which confidence saturates at 1.0.
pub const CONFIDENCE_DIVISOR: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub category: Category,
    /// Number of the winning category's patterns that matched.
    pub score: usize,
    pub confidence: f64,
}

impl Classification {
    fn fallback(patterns: &PatternSet) -> Self {
        Self {
            category: patterns.default_category(),
            score: 0,
            confidence: 0.0,
        }
    }
}

/// Pick the category with the most matching patterns.
///
/// Ties go to the category registered first. When nothing matches the set's
/// default category is returned with confidence 0.0.
pub fn classify(text: &str, patterns: &PatternSet) -> Classification {
    let lowered = text.to_lowercase();
    let mut best = Classification::fallback(patterns);

    for (category, regexes) in patterns.iter() {
        let score = regexes.iter().filter(|re| re.is_match(&lowered)).count();
        if score > best.score {
            best = Classification {
                category,
                score,
                confidence: (score as f64 / CONFIDENCE_DIVISOR).min(1.0),
            };
        }
    }

    best
}
