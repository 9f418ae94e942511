use thiserror::Error;

/// A rule or accessor read a field the row does not carry in the expected shape.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    #[error("missing field '{0}'")]
    Missing(String),

    #[error("field '{field}' is not numeric: {value}")]
    NotNumeric { field: String, value: String },
}

/// Failures of the query execution service. Never recovered by the analysis core.
#[derive(Error, Debug)]
pub enum QueryError {
    /// No SQL template is registered under the requested id.
    #[error("Unknown query template: {0}")]
    UnknownTemplate(String),

    /// A template placeholder could not be bound to a parameter.
    #[error("Parameter binding failed: {0}")]
    Binding(String),

    /// The executor is not configured or failed to initialise.
    #[error("Query executor unavailable: {0}")]
    Unavailable(String),

    /// The warehouse rejected or failed the query.
    #[error("{kind}: {message}")]
    Backend { kind: String, message: String },
}

impl QueryError {
    /// Short machine-readable error type reported to HTTP callers.
    pub fn kind(&self) -> &str {
        match self {
            QueryError::UnknownTemplate(_) => "UnknownTemplate",
            QueryError::Binding(_) => "BindingError",
            QueryError::Unavailable(_) => "ExecutorUnavailable",
            QueryError::Backend { kind, .. } => kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_error_messages_name_the_field() {
        let err = FieldError::Missing("store_id".into());
        assert_eq!(err.to_string(), "missing field 'store_id'");

        let err = FieldError::NotNumeric {
            field: "gross_revenue".into(),
            value: "n/a".into(),
        };
        assert!(err.to_string().contains("gross_revenue"));
        assert!(err.to_string().contains("n/a"));
    }

    #[test]
    fn query_error_kinds() {
        assert_eq!(QueryError::UnknownTemplate("x".into()).kind(), "UnknownTemplate");
        assert_eq!(QueryError::Binding("x".into()).kind(), "BindingError");
        assert_eq!(QueryError::Unavailable("x".into()).kind(), "ExecutorUnavailable");

        let err = QueryError::Backend {
            kind: "QueryFailed".into(),
            message: "SYNTAX_ERROR: line 1:8".into(),
        };
        assert_eq!(err.kind(), "QueryFailed");
        assert_eq!(err.to_string(), "QueryFailed: SYNTAX_ERROR: line 1:8");
    }
}
