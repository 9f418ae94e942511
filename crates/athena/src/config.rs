use atelier_core::config::{active_profile, profiled_env_opt};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default S3 output location for Athena query results.
const DEFAULT_OUTPUT_LOCATION: &str = "s3://atelier-athena-results/";

/// 10 GB in bytes (10 * 1024^3).
const DEFAULT_MAX_SCAN_BYTES: u64 = 10_737_418_240;

const DEFAULT_REGION: &str = "eu-central-1";

fn profiled_env_or(profile: &str, key: &str, default: &str) -> String {
    profiled_env_opt(profile, key).unwrap_or_else(|| default.to_string())
}

fn profiled_env_parse<T: std::str::FromStr>(profile: &str, key: &str, default: T) -> T {
    profiled_env_opt(profile, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn profiled_env_bool(profile: &str, key: &str, default: bool) -> bool {
    match profiled_env_opt(profile, key) {
        Some(v) => matches!(v.to_ascii_lowercase().as_str(), "true" | "1" | "yes"),
        None => default,
    }
}

/// An Athena configuration that cannot be used to run queries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("ATHENA_OUTPUT_LOCATION must be an s3:// URI, got '{0}'")]
    InvalidOutputLocation(String),

    #[error("ATHENA_TIMEOUT_SECONDS must be greater than zero")]
    ZeroTimeout,

    #[error("ATHENA_REGION is empty")]
    MissingRegion,
}

// ── AthenaConfig ─────────────────────────────────────────────────

/// Configuration for the Athena-backed query executor.
///
/// Reads from environment variables with optional profile prefix.
/// When `ATELIER_PROFILE=PROD`, checks `PROD_ATHENA_DATABASE` before `ATHENA_DATABASE`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AthenaConfig {
    pub enabled: bool,
    pub region: String,
    pub database: String,
    pub workgroup: String,
    /// S3 path for query results.
    pub output_location: String,
    /// Maximum bytes to scan per query (0 = unlimited).
    pub max_scan_bytes: u64,
    pub timeout_seconds: u32,
}

impl AthenaConfig {
    /// Build config from environment variables using the active profile.
    ///
    /// `ATHENA_REGION` falls back to `AWS_REGION` before using the default.
    pub fn from_env() -> Self {
        Self::from_env_profiled(&active_profile())
    }

    pub fn from_env_profiled(profile: &str) -> Self {
        let region = profiled_env_opt(profile, "ATHENA_REGION")
            .or_else(|| profiled_env_opt(profile, "AWS_REGION"))
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        Self {
            enabled: profiled_env_bool(profile, "ATHENA_ENABLED", false),
            region,
            database: profiled_env_or(profile, "ATHENA_DATABASE", "retail_analytics"),
            workgroup: profiled_env_or(profile, "ATHENA_WORKGROUP", "primary"),
            output_location: profiled_env_or(
                profile,
                "ATHENA_OUTPUT_LOCATION",
                DEFAULT_OUTPUT_LOCATION,
            ),
            max_scan_bytes: profiled_env_parse(
                profile,
                "ATHENA_MAX_SCAN_BYTES",
                DEFAULT_MAX_SCAN_BYTES,
            ),
            timeout_seconds: profiled_env_parse(profile, "ATHENA_TIMEOUT_SECONDS", 300),
        }
    }

    /// Returns `true` when Athena is enabled and the output location has been
    /// explicitly configured (differs from the placeholder default).
    pub fn is_configured(&self) -> bool {
        self.enabled && self.output_location != DEFAULT_OUTPUT_LOCATION
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.region.trim().is_empty() {
            return Err(ConfigError::MissingRegion);
        }
        if !self.output_location.starts_with("s3://") {
            return Err(ConfigError::InvalidOutputLocation(self.output_location.clone()));
        }
        if self.timeout_seconds == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    /// Convenience: max scan budget expressed in gigabytes.
    pub fn max_scan_gb(&self) -> f64 {
        self.max_scan_bytes as f64 / (1024.0 * 1024.0 * 1024.0)
    }

    /// Log-safe view; the output bucket is reduced to its scheme and bucket name.
    pub fn redacted_summary(&self) -> serde_json::Value {
        let bucket = self
            .output_location
            .strip_prefix("s3://")
            .and_then(|rest| rest.split('/').next())
            .map(|b| format!("s3://{}/…", b))
            .unwrap_or_else(|| "(invalid)".to_string());
        serde_json::json!({
            "enabled": self.enabled,
            "region": self.region,
            "database": self.database,
            "workgroup": self.workgroup,
            "output_location": bucket,
            "max_scan_gb": self.max_scan_gb(),
            "timeout_seconds": self.timeout_seconds,
        })
    }
}

// ── Tests ────────────────────────────────────────────────────────
