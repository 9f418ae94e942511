//! Integration tests for the atelier HTTP surface and planner/template wiring.

mod http;
mod templates;
mod thresholds;

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use atelier_core::config::EngineConfig;
use atelier_core::{QueryError, QueryExecutor, QueryRequest, Row};
use atelier_insight::ThresholdConfig;
use atelier_server::state::AppState;
use chrono::NaiveDate;

/// Executor that returns canned rows (or a canned error) and records requests.
pub struct InMemoryExecutor {
    rows: Vec<Row>,
    failure: Option<(String, String)>,
    pub seen: Mutex<Vec<QueryRequest>>,
}

impl InMemoryExecutor {
    pub fn with_rows(rows: Vec<Row>) -> Self {
        Self {
            rows,
            failure: None,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(kind: &str, message: &str) -> Self {
        Self {
            rows: Vec::new(),
            failure: Some((kind.to_string(), message.to_string())),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn last_request(&self) -> QueryRequest {
        self.seen.lock().unwrap().last().cloned().expect("no request recorded")
    }
}

#[async_trait]
impl QueryExecutor for InMemoryExecutor {
    async fn execute(&self, request: &QueryRequest) -> Result<Vec<Row>, QueryError> {
        self.seen.lock().unwrap().push(request.clone());
        match &self.failure {
            Some((kind, message)) => Err(QueryError::Backend {
                kind: kind.clone(),
                message: message.clone(),
            }),
            None => Ok(self.rows.clone()),
        }
    }

    fn name(&self) -> &str {
        "in-memory"
    }
}

pub fn engine_config() -> EngineConfig {
    EngineConfig {
        templates_dir: queries_dir(),
        thresholds_path: None,
        reference_date: NaiveDate::from_ymd_opt(2024, 12, 18),
        default_limit: 100,
        max_limit: 500,
    }
}

pub fn state(executor: Arc<InMemoryExecutor>) -> Arc<AppState> {
    state_with(executor, ThresholdConfig::default())
}

pub fn state_with(executor: Arc<InMemoryExecutor>, thresholds: ThresholdConfig) -> Arc<AppState> {
    Arc::new(AppState::new(executor, thresholds, engine_config()).unwrap())
}

pub fn queries_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../queries")
}
