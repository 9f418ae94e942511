//! In-memory shape of a finished Athena query: column metadata, raw string
//! cells and execution statistics. Typed conversion lives in `convert`.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AthenaColumn {
    pub name: String,
    /// Athena type name as reported by `ResultSetMetadata` (`varchar`, `bigint`,
    /// `decimal(12,2)`, ...).
    pub data_type: String,
}

/// Execution statistics reported by `GetQueryExecution`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryMetadata {
    pub query_id: String,
    pub bytes_scanned: u64,
    /// Engine execution time in milliseconds.
    pub execution_time_ms: u64,
    /// Final state ("SUCCEEDED", "FAILED", "CANCELLED").
    pub state: String,
    pub output_location: Option<String>,
}

/// All pages of a query's result set, header echo removed.
///
/// `None` cells are SQL NULL. Cell order follows `columns`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AthenaQueryResult {
    pub columns: Vec<AthenaColumn>,
    pub rows: Vec<Vec<Option<String>>>,
    pub metadata: QueryMetadata,
}

/// $5 per TB scanned.
const DOLLARS_PER_BYTE: f64 = 5.0 / (1024.0 * 1024.0 * 1024.0 * 1024.0);

impl AthenaQueryResult {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Raw cell text; `None` for NULL, an unknown column or an out-of-range row.
    pub fn get_value(&self, row: usize, col: &str) -> Option<&str> {
        let idx = self.column_index(col)?;
        self.rows.get(row)?.get(idx)?.as_deref()
    }

    pub fn cost_estimate_usd(&self) -> f64 {
        self.metadata.bytes_scanned as f64 * DOLLARS_PER_BYTE
    }

    /// Append the rows of a follow-up `GetQueryResults` page.
    ///
    /// Column metadata is taken from the first page; a later page only
    /// contributes columns when none were known yet.
    pub fn append_page(&mut self, columns: Vec<AthenaColumn>, rows: Vec<Vec<Option<String>>>) {
        if self.columns.is_empty() {
            self.columns = columns;
        }
        self.rows.extend(rows);
    }
}

/// Plain-text table used by the CLI and debug logs.
impl fmt::Display for AthenaQueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.columns.is_empty() {
            return write!(f, "(empty result set)");
        }

        let cell = |v: &Option<String>| v.as_deref().unwrap_or("NULL").chars().count();
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.name.chars().count()).collect();
        for row in &self.rows {
            for (w, v) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell(v));
            }
        }

        let names: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:<w$}", c.name, w = *w))
            .collect();
        writeln!(f, "{}", names.join(" | "))?;

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        writeln!(f, "{}", rule.join("-+-"))?;

        for row in &self.rows {
            let cells: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(v, w)| format!("{:<w$}", v.as_deref().unwrap_or("NULL"), w = *w))
                .collect();
            writeln!(f, "{}", cells.join(" | "))?;
        }

        writeln!(f)?;
        write!(
            f,
            "Query {} | {} rows | {:.3} MB scanned | {}ms | ${:.6}",
            self.metadata.query_id,
            self.rows.len(),
            self.metadata.bytes_scanned as f64 / (1024.0 * 1024.0),
            self.metadata.execution_time_ms,
            self.cost_estimate_usd(),
        )
    }
}
