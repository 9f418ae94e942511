//! Query execution backed by AWS Athena.
//!
//! SQL lives in `<templates_dir>/<engine>/<report>.sql` with `:name`
//! placeholders. [`AthenaExecutor`] resolves a template, binds the request's
//! parameters as Athena execution parameters, runs the query and converts the
//! result set into [`atelier_core::Row`]s.

pub mod binding;
pub mod client;
pub mod config;
pub mod convert;
pub mod executor;
pub mod result;
pub mod templates;

pub use binding::{bind, render_literal, BoundQuery};
pub use client::{AthenaClient, AthenaError};
pub use config::{AthenaConfig, ConfigError};
pub use convert::result_to_rows;
pub use executor::AthenaExecutor;
pub use result::{AthenaColumn, AthenaQueryResult, QueryMetadata};
pub use templates::{TemplateCatalog, TemplateError};
