//! Boundary contract with the query execution service.
//!
//! The analysis core never builds SQL. It hands a [`QueryRequest`] (template id
//! plus named, typed parameters) to a [`QueryExecutor`] and receives rows back.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::QueryError;
use crate::row::Row;

/// A typed value bound to a named template placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ParamValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Date(NaiveDate),
    Null,
}

impl ParamValue {
    /// Text value, or `Null` when absent.
    pub fn text_or_null(value: Option<impl Into<String>>) -> Self {
        value.map(|v| ParamValue::Text(v.into())).unwrap_or(ParamValue::Null)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryParam {
    pub name: String,
    pub value: ParamValue,
}

/// What to run: a registered template and the parameters to bind into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub template_id: String,
    pub params: Vec<QueryParam>,
}

impl QueryRequest {
    pub fn new(template_id: impl Into<String>) -> Self {
        Self {
            template_id: template_id.into(),
            params: Vec::new(),
        }
    }

    /// Append a parameter, replacing any earlier binding of the same name.
    pub fn with(mut self, name: &str, value: ParamValue) -> Self {
        self.params.retain(|p| p.name != name);
        self.params.push(QueryParam {
            name: name.to_string(),
            value,
        });
        self
    }

    pub fn param(&self, name: &str) -> Option<&ParamValue> {
        self.params.iter().find(|p| p.name == name).map(|p| &p.value)
    }
}

/// The query execution service consumed by the engines.
///
/// Implementations must treat every call as independent; rows may carry
/// missing or null fields and callers must not assume a fixed column set.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn execute(&self, request: &QueryRequest) -> Result<Vec<Row>, QueryError>;

    /// Backend name for logs and health output.
    fn name(&self) -> &str;

    fn is_ready(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    struct Canned(Vec<Row>);

    #[async_trait]
    impl QueryExecutor for Canned {
        async fn execute(&self, request: &QueryRequest) -> Result<Vec<Row>, QueryError> {
            if request.template_id == "missing" {
                return Err(QueryError::UnknownTemplate(request.template_id.clone()));
            }
            Ok(self.0.clone())
        }

        fn name(&self) -> &str {
            "canned"
        }
    }

    #[test]
    fn with_replaces_existing_binding() {
        let req = QueryRequest::new("formal_wear/suit_sales")
            .with("limit", ParamValue::Integer(100))
            .with("country", ParamValue::Null)
            .with("limit", ParamValue::Integer(5));
        assert_eq!(req.params.len(), 2);
        assert_eq!(req.param("limit"), Some(&ParamValue::Integer(5)));
        assert_eq!(req.params[1].name, "limit");
        assert!(req.param("season").is_none());
    }

    #[test]
    fn text_or_null() {
        assert_eq!(ParamValue::text_or_null(Some("Turkey")), ParamValue::Text("Turkey".into()));
        assert_eq!(ParamValue::text_or_null(None::<String>), ParamValue::Null);
    }

    #[tokio::test]
    async fn executor_is_object_safe() {
        let exec: Arc<dyn QueryExecutor> = Arc::new(Canned(vec![Row::new().with("a", 1)]));
        let rows = exec.execute(&QueryRequest::new("t")).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert!(exec.is_ready());

        let err = exec.execute(&QueryRequest::new("missing")).await.unwrap_err();
        assert_eq!(err.kind(), "UnknownTemplate");
    }
}
