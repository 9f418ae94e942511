use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use atelier_core::{QueryError, QueryExecutor, QueryRequest, Row};
use tracing::{info, warn};

use crate::binding::bind;
use crate::client::AthenaClient;
use crate::config::AthenaConfig;
use crate::convert::result_to_rows;
use crate::templates::TemplateCatalog;

/// [`QueryExecutor`] that resolves templates from a [`TemplateCatalog`] and
/// runs them on Athena.
///
/// Built without a client when Athena is disabled or misconfigured; every
/// request then fails with [`QueryError::Unavailable`] so the server can still
/// start and report readiness.
pub struct AthenaExecutor {
    catalog: Arc<TemplateCatalog>,
    client: Option<AthenaClient>,
    unavailable_reason: String,
}

impl AthenaExecutor {
    pub async fn connect(config: AthenaConfig, catalog: Arc<TemplateCatalog>) -> Self {
        if !config.enabled {
            info!("Athena disabled; query endpoints will report ExecutorUnavailable");
            return Self::unavailable(catalog, "Athena is not enabled (set ATHENA_ENABLED=true)");
        }
        if let Err(e) = config.validate() {
            warn!(error = %e, "Athena configuration rejected");
            return Self::unavailable(catalog, &e.to_string());
        }
        match AthenaClient::new(config).await {
            Ok(client) => Self {
                catalog,
                client: Some(client),
                unavailable_reason: String::new(),
            },
            Err(e) => {
                warn!(error = %e, "Athena client initialisation failed");
                Self::unavailable(catalog, &e.to_string())
            }
        }
    }

    pub fn unavailable(catalog: Arc<TemplateCatalog>, reason: &str) -> Self {
        Self {
            catalog,
            client: None,
            unavailable_reason: reason.to_string(),
        }
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }
}

#[async_trait]
impl QueryExecutor for AthenaExecutor {
    async fn execute(&self, request: &QueryRequest) -> Result<Vec<Row>, QueryError> {
        let template = self.catalog.get(&request.template_id)?;
        let bound = bind(template, request)?;
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| QueryError::Unavailable(self.unavailable_reason.clone()))?;

        let started = Instant::now();
        let result = client.execute(&bound).await?;
        let rows = result_to_rows(&result);

        info!(
            template = %request.template_id,
            query_id = %result.metadata.query_id,
            rows = rows.len(),
            bytes_scanned = result.metadata.bytes_scanned,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Athena query completed"
        );
        Ok(rows)
    }

    fn name(&self) -> &str {
        "athena"
    }

    fn is_ready(&self) -> bool {
        self.client.is_some()
    }
}
