//! Integration tests for atelier-athena.
//!
//! Everything here runs offline: template discovery against the repository's
//! `queries/` directory, parameter binding and result conversion.

mod binding;
mod convert;
mod templates;

use std::path::PathBuf;

/// The repository-level SQL template directory.
pub fn queries_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../queries")
}
