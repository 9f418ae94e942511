//! AWS Athena query execution client.
//!
//! [`AthenaClient`] runs a bound statement with positional execution
//! parameters, polls with exponential backoff, enforces the timeout and scan
//! limit, and pages through `GetQueryResults` into an [`AthenaQueryResult`].

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use atelier_core::QueryError;
use aws_config::BehaviorVersion;
use aws_sdk_athena::operation::get_query_results::GetQueryResultsOutput;
use aws_sdk_athena::types::{
    QueryExecution, QueryExecutionContext, QueryExecutionState, ResultConfiguration,
};
use aws_types::region::Region;
use tracing::{debug, error, info, warn};

use crate::binding::BoundQuery;
use crate::config::AthenaConfig;
use crate::result::{AthenaColumn, AthenaQueryResult, QueryMetadata};

const INITIAL_DELAY_MS: u64 = 200;
const MAX_DELAY_MS: u64 = 2000;
const BACKOFF_FACTOR: f64 = 1.5;

// ── Error ────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum AthenaError {
    #[error("Athena is not enabled in config")]
    NotEnabled,

    #[error("Query {query_id} failed: {reason}")]
    QueryFailed { query_id: String, reason: String },

    #[error("Query {query_id} was cancelled")]
    QueryCancelled { query_id: String },

    #[error("Query {query_id} timed out after {seconds}s")]
    QueryTimeout { query_id: String, seconds: u32 },

    /// Checked after completion; Athena has no pre-execution scan estimate.
    #[error("Scan limit exceeded: {bytes_scanned} bytes scanned, limit is {limit} bytes")]
    ScanLimitExceeded { bytes_scanned: u64, limit: u64 },

    #[error("AWS SDK error: {0}")]
    AwsSdk(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

impl AthenaError {
    pub fn kind(&self) -> &'static str {
        match self {
            AthenaError::NotEnabled => "NotEnabled",
            AthenaError::QueryFailed { .. } => "QueryFailed",
            AthenaError::QueryCancelled { .. } => "QueryCancelled",
            AthenaError::QueryTimeout { .. } => "QueryTimeout",
            AthenaError::ScanLimitExceeded { .. } => "ScanLimitExceeded",
            AthenaError::AwsSdk(_) => "AwsSdkError",
            AthenaError::ParseError(_) => "ParseError",
        }
    }
}

impl From<AthenaError> for QueryError {
    fn from(err: AthenaError) -> Self {
        match err {
            AthenaError::NotEnabled => QueryError::Unavailable(err.to_string()),
            other => QueryError::Backend {
                kind: other.kind().to_string(),
                message: other.to_string(),
            },
        }
    }
}

// ── Backoff ──────────────────────────────────────────────────────

/// Next polling delay: ×1.5, capped at 2 s.
pub(crate) fn next_delay(delay_ms: u64) -> u64 {
    ((delay_ms as f64 * BACKOFF_FACTOR) as u64).min(MAX_DELAY_MS)
}

/// 0..100 ms of jitter from the clock's nanosecond fraction.
pub(crate) fn jitter_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .subsec_nanos() as u64
        % 100
}

// ── Client ───────────────────────────────────────────────────────

pub struct AthenaClient {
    config: AthenaConfig,
    athena_client: aws_sdk_athena::Client,
}

impl AthenaClient {
    /// Returns [`AthenaError::NotEnabled`] if the config has Athena disabled.
    pub async fn new(config: AthenaConfig) -> Result<Self, AthenaError> {
        if !config.enabled {
            return Err(AthenaError::NotEnabled);
        }

        let aws_cfg = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;
        let athena_client = aws_sdk_athena::Client::new(&aws_cfg);

        info!(
            region = %config.region,
            database = %config.database,
            workgroup = %config.workgroup,
            "AthenaClient initialised"
        );

        Ok(Self {
            config,
            athena_client,
        })
    }

    pub fn config(&self) -> &AthenaConfig {
        &self.config
    }

    /// Run a bound statement to completion and collect every result page.
    pub async fn execute(&self, query: &BoundQuery) -> Result<AthenaQueryResult, AthenaError> {
        debug!(sql = %query.sql, params = ?query.names, "Starting Athena query");

        let mut request = self
            .athena_client
            .start_query_execution()
            .query_string(&query.sql)
            .query_execution_context({
                let mut ctx = QueryExecutionContext::builder();
                if !self.config.database.is_empty() {
                    ctx = ctx.database(&self.config.database);
                }
                ctx.build()
            })
            .result_configuration(
                ResultConfiguration::builder()
                    .output_location(&self.config.output_location)
                    .build(),
            )
            .work_group(&self.config.workgroup);
        if !query.parameters.is_empty() {
            request = request.set_execution_parameters(Some(query.parameters.clone()));
        }

        let start_resp = request
            .send()
            .await
            .map_err(|e| AthenaError::AwsSdk(e.to_string()))?;

        let query_id = start_resp
            .query_execution_id()
            .ok_or_else(|| AthenaError::AwsSdk("No query execution ID returned".into()))?
            .to_string();
        info!(query_id = %query_id, params = query.parameters.len(), "Query execution started");

        let execution = self.poll_until_complete(&query_id).await?;
        let metadata = Self::extract_metadata(&query_id, &execution);

        let limit = self.config.max_scan_bytes;
        if limit > 0 && metadata.bytes_scanned > limit {
            warn!(
                query_id = %query_id,
                bytes_scanned = metadata.bytes_scanned,
                limit,
                "Query exceeded scan limit"
            );
            return Err(AthenaError::ScanLimitExceeded {
                bytes_scanned: metadata.bytes_scanned,
                limit,
            });
        }

        self.fetch_all_pages(metadata).await
    }

    pub async fn cancel_query(&self, query_id: &str) -> Result<(), AthenaError> {
        info!(query_id = %query_id, "Cancelling query");
        self.athena_client
            .stop_query_execution()
            .query_execution_id(query_id)
            .send()
            .await
            .map_err(|e| AthenaError::AwsSdk(e.to_string()))?;
        Ok(())
    }

    // ── Private helpers ──────────────────────────────────────────

    /// Poll `GetQueryExecution` until a terminal state or the timeout.
    async fn poll_until_complete(&self, query_id: &str) -> Result<QueryExecution, AthenaError> {
        let start = Instant::now();
        let timeout = Duration::from_secs(self.config.timeout_seconds as u64);
        let mut delay_ms = INITIAL_DELAY_MS;

        loop {
            let resp = self
                .athena_client
                .get_query_execution()
                .query_execution_id(query_id)
                .send()
                .await
                .map_err(|e| AthenaError::AwsSdk(e.to_string()))?;

            let qe = resp
                .query_execution()
                .ok_or_else(|| AthenaError::AwsSdk("No query execution in response".into()))?
                .clone();

            let state = qe
                .status()
                .and_then(|s| s.state())
                .cloned()
                .unwrap_or(QueryExecutionState::Queued);

            debug!(
                query_id = %query_id,
                state = ?state,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Polling query status"
            );

            match state {
                QueryExecutionState::Succeeded => return Ok(qe),
                QueryExecutionState::Failed => {
                    let reason = qe
                        .status()
                        .and_then(|s| s.state_change_reason())
                        .unwrap_or("unknown")
                        .to_string();
                    error!(query_id = %query_id, reason = %reason, "Query failed");
                    return Err(AthenaError::QueryFailed {
                        query_id: query_id.to_string(),
                        reason,
                    });
                }
                QueryExecutionState::Cancelled => {
                    warn!(query_id = %query_id, "Query was cancelled");
                    return Err(AthenaError::QueryCancelled {
                        query_id: query_id.to_string(),
                    });
                }
                _ => {}
            }

            if start.elapsed() > timeout {
                warn!(
                    query_id = %query_id,
                    timeout_seconds = self.config.timeout_seconds,
                    "Query timed out, cancelling"
                );
                if let Err(e) = self.cancel_query(query_id).await {
                    warn!(query_id = %query_id, error = %e, "Cancel after timeout failed");
                }
                return Err(AthenaError::QueryTimeout {
                    query_id: query_id.to_string(),
                    seconds: self.config.timeout_seconds,
                });
            }

            tokio::time::sleep(Duration::from_millis(delay_ms + jitter_ms())).await;
            delay_ms = next_delay(delay_ms);
        }
    }

    async fn fetch_all_pages(
        &self,
        metadata: QueryMetadata,
    ) -> Result<AthenaQueryResult, AthenaError> {
        let query_id = metadata.query_id.clone();
        let mut result = AthenaQueryResult {
            columns: Vec::new(),
            rows: Vec::new(),
            metadata,
        };
        let mut next_token: Option<String> = None;
        let mut first_page = true;
        let mut pages = 0usize;

        loop {
            let output = self
                .athena_client
                .get_query_results()
                .query_execution_id(&query_id)
                .set_next_token(next_token.take())
                .send()
                .await
                .map_err(|e| AthenaError::AwsSdk(e.to_string()))?;

            let (columns, rows) = parse_page(&output, first_page)?;
            result.append_page(columns, rows);
            first_page = false;
            pages += 1;

            match output.next_token() {
                Some(token) if !token.is_empty() => next_token = Some(token.to_string()),
                _ => break,
            }
        }

        debug!(
            query_id = %query_id,
            pages,
            columns = result.column_count(),
            rows = result.row_count(),
            "Fetched Athena results"
        );
        Ok(result)
    }

    fn extract_metadata(query_id: &str, qe: &QueryExecution) -> QueryMetadata {
        let stats = qe.statistics();
        QueryMetadata {
            query_id: query_id.to_string(),
            bytes_scanned: stats.and_then(|s| s.data_scanned_in_bytes()).unwrap_or(0) as u64,
            execution_time_ms: stats
                .and_then(|s| s.engine_execution_time_in_millis())
                .unwrap_or(0) as u64,
            state: qe
                .status()
                .and_then(|s| s.state())
                .map(|s| s.as_str().to_string())
                .unwrap_or_else(|| "UNKNOWN".to_string()),
            output_location: qe
                .result_configuration()
                .and_then(|rc| rc.output_location())
                .map(|s| s.to_string()),
        }
    }
}

/// Columns and data rows of one `GetQueryResults` page.
///
/// On the first page of a SELECT (no `UpdateCount`) the first row echoes the
/// column headers and is dropped.
fn parse_page(
    output: &GetQueryResultsOutput,
    first_page: bool,
) -> Result<(Vec<AthenaColumn>, Vec<Vec<Option<String>>>), AthenaError> {
    let result_set = output
        .result_set()
        .ok_or_else(|| AthenaError::ParseError("No ResultSet in response".into()))?;

    let columns: Vec<AthenaColumn> = result_set
        .result_set_metadata()
        .map(|meta| {
            meta.column_info()
                .iter()
                .map(|ci| AthenaColumn {
                    name: ci.name().to_string(),
                    data_type: ci.r#type().to_string(),
                })
                .collect()
        })
        .unwrap_or_default();

    let raw_rows = result_set.rows();
    let skip = usize::from(first_page && output.update_count().is_none() && !raw_rows.is_empty());

    let rows = raw_rows
        .iter()
        .skip(skip)
        .map(|row| {
            row.data()
                .iter()
                .map(|datum| datum.var_char_value().map(|v| v.to_string()))
                .collect()
        })
        .collect();

    Ok((columns, rows))
}
