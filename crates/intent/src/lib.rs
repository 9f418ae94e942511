//! Intent and entity recognition for retail analytics questions.
//!
//! Pattern tables are compiled once into a [`Registry`] per [`Engine`]; every
//! other operation here is a pure function of the input text and a registry.

pub mod category;
pub mod classifier;
pub mod context;
pub mod entities;
pub mod language;
pub mod patterns;
pub mod suggestions;

pub use category::{Category, Engine, UnknownName};
pub use classifier::{classify, Classification, CONFIDENCE_DIVISOR};
pub use context::QueryContext;
pub use entities::{canonical_country, extract, Entities, EntityKind, EntityValue};
pub use language::Language;
pub use patterns::{EntityPatternSet, PatternError, PatternSet, Registry};
pub use suggestions::{followups, MAX_FOLLOWUPS};
