//! SQL template catalog.
//!
//! Loaded once at startup from `<root>/<engine>/<report>.sql` and keyed by
//! `"<engine>/<report>"`, the same id the planner puts in a `QueryRequest`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use atelier_core::QueryError;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template directory not found: {0}")]
    MissingDir(PathBuf),

    #[error("Failed to read template {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Template {0} is empty")]
    Empty(String),
}

#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    templates: BTreeMap<String, String>,
}

impl TemplateCatalog {
    /// Walk `root` for `*.sql` files. Files directly under `root` are keyed by
    /// their stem alone.
    pub fn load(root: &Path) -> Result<Self, TemplateError> {
        if !root.is_dir() {
            return Err(TemplateError::MissingDir(root.to_path_buf()));
        }

        let mut templates = BTreeMap::new();
        for entry in walkdir::WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || path.extension().map(|e| e != "sql").unwrap_or(true) {
                continue;
            }
            let Some(id) = template_id(root, path) else {
                continue;
            };

            let sql = std::fs::read_to_string(path).map_err(|source| TemplateError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            if sql.trim().is_empty() {
                return Err(TemplateError::Empty(id));
            }
            debug!(template = %id, bytes = sql.len(), "Loaded SQL template");
            templates.insert(id, sql);
        }

        info!(dir = %root.display(), count = templates.len(), "SQL template catalog loaded");
        Ok(Self { templates })
    }

    /// Catalog built from in-memory pairs; used by tests and the CLI.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            templates: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, id: &str) -> Result<&str, QueryError> {
        self.templates
            .get(id)
            .map(String::as_str)
            .ok_or_else(|| QueryError::UnknownTemplate(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.templates.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// `root/formal_wear/suit_sales.sql` → `formal_wear/suit_sales`.
fn template_id(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?.with_extension("");
    let id = rel.to_str()?.replace('\\', "/");
    (!id.is_empty()).then_some(id)
}
