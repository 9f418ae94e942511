//! CLI argument parsing and subcommand dispatch.

use std::path::{Path, PathBuf};

use anyhow::Context;
use atelier_core::{Config, Row};
use atelier_insight::{analyze, format, prepare, render_text, ThresholdConfig};
use atelier_intent::{Engine, QueryContext, Registry};
use clap::{Parser, Subcommand};
use tracing::info;

use crate::router::build_router;
use crate::startup::build_state;

/// Retail analytics engines over a SQL warehouse.
#[derive(Parser, Debug)]
#[command(name = "atelier", version, about = "Retail analytics engines over a SQL warehouse")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Bind address (overrides HOST)
        #[arg(long)]
        host: Option<String>,
        /// Port (overrides PORT)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Classify a question and print its query context as JSON
    Classify {
        /// formal_wear, franchise_ops, store_performance or inventory (URL slugs also work)
        engine: Engine,
        text: String,
        /// Category override
        #[arg(long)]
        query_type: Option<String>,
    },
    /// Analyze a JSON array of rows offline
    Analyze {
        engine: Engine,
        /// File holding a JSON array of row objects
        rows: PathBuf,
        #[arg(long, default_value = "")]
        question: String,
        #[arg(long)]
        query_type: Option<String>,
        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

pub async fn run(cli: Cli, mut config: Config) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            serve(&config).await
        }
        Command::Classify {
            engine,
            text,
            query_type,
        } => {
            println!("{}", classify(engine, &text, query_type.as_deref())?);
            Ok(())
        }
        Command::Analyze {
            engine,
            rows,
            question,
            query_type,
            json,
        } => {
            let thresholds = ThresholdConfig::load(config.engine.thresholds_path.as_deref())?;
            let output = analyze_file(engine, &rows, &question, query_type.as_deref(), &thresholds, json)?;
            println!("{output}");
            Ok(())
        }
    }
}

async fn serve(config: &Config) -> anyhow::Result<()> {
    config.log_summary();
    let state = build_state(config).await?;
    info!(
        executor = state.executor.name(),
        ready = state.executor.is_ready(),
        "Query executor initialised"
    );
    let app = build_router(std::sync::Arc::new(state), &config.server);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

/// Pretty JSON of the [`QueryContext`] for `text`.
pub fn classify(engine: Engine, text: &str, query_type: Option<&str>) -> anyhow::Result<String> {
    let registry = Registry::builtin(engine)?;
    let context = QueryContext::build(&registry, text, query_type);
    Ok(serde_json::to_string_pretty(&context)?)
}

/// Classify `question`, analyze the rows in `path` and render the report.
pub fn analyze_file(
    engine: Engine,
    path: &Path,
    question: &str,
    query_type: Option<&str>,
    thresholds: &ThresholdConfig,
    json: bool,
) -> anyhow::Result<String> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let mut rows: Vec<Row> = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of objects", path.display()))?;

    let registry = Registry::builtin(engine)?;
    let context = QueryContext::build(&registry, question, query_type);
    prepare(context.detected_category, &mut rows);
    let outcome = analyze(&rows, context.detected_category, &context, thresholds);
    let report = format(&outcome, &context);

    if json {
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(render_text(&report))
    }
}
