//! Integration tests for atelier-intent: classification, extraction and context
//! building through the public API against the built-in registries.

mod classification;
mod context;
