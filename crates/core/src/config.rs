use std::env;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Active profile from `ATELIER_PROFILE`, upper-cased (empty = default).
pub fn active_profile() -> String {
    env_or("ATELIER_PROFILE", "").to_uppercase()
}

/// Read a profiled env var: tries {PROFILE}_{KEY} first, falls back to {KEY}.
pub fn profiled_env_opt(profile: &str, key: &str) -> Option<String> {
    if !profile.is_empty() {
        let prefixed = format!("{}_{}", profile, key);
        if let Some(v) = env_opt(&prefixed) {
            return Some(v);
        }
    }
    env_opt(key)
}

fn profiled_env_or(profile: &str, key: &str, default: &str) -> String {
    profiled_env_opt(profile, key).unwrap_or_else(|| default.to_string())
}

fn profiled_env_u16(profile: &str, key: &str, default: u16) -> u16 {
    profiled_env_opt(profile, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn profiled_env_u32(profile: &str, key: &str, default: u32) -> u32 {
    profiled_env_opt(profile, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name (empty = default).
    pub profile: String,
    pub server: ServerConfig,
    pub engine: EngineConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    /// Profile is read from `ATELIER_PROFILE`. When set (e.g. `PROD`), every key
    /// is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Self {
        Self::for_profile(&active_profile())
    }

    /// Build config for a specific named profile (empty string = default).
    pub fn for_profile(profile: &str) -> Self {
        let p = profile.to_uppercase();
        let p = p.as_str();
        Self {
            profile: p.to_string(),
            server: ServerConfig::from_env_profiled(p),
            engine: EngineConfig::from_env_profiled(p),
        }
    }

    pub fn profile_label(&self) -> &str {
        if self.profile.is_empty() { "default" } else { &self.profile }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded (profile: {}):", self.profile_label());
        tracing::info!("  server:      {}:{}", self.server.host, self.server.port);
        tracing::info!("  templates:   dir={}", self.engine.templates_dir.display());
        tracing::info!(
            "  thresholds:  {}",
            self.engine
                .thresholds_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in defaults)".to_string())
        );
        tracing::info!(
            "  limits:      default={}, max={}",
            self.engine.default_limit, self.engine.max_limit
        );
        if let Some(date) = self.engine.reference_date {
            tracing::info!("  reference:   date={}", date);
        }
    }

    /// Return a view safe for API responses.
    pub fn redacted_summary(&self) -> serde_json::Value {
        serde_json::json!({
            "profile": self.profile_label(),
            "server": { "host": self.server.host, "port": self.server.port },
            "engine": {
                "templates_dir": self.engine.templates_dir,
                "thresholds_path": self.engine.thresholds_path,
                "reference_date": self.engine.reference_date,
                "default_limit": self.engine.default_limit,
                "max_limit": self.engine.max_limit,
            },
        })
    }
}

// ── Server ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origin: String,
}

impl ServerConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            host: profiled_env_or(p, "HOST", "0.0.0.0"),
            port: profiled_env_u16(p, "PORT", 8080),
            cors_origin: profiled_env_or(p, "CORS_ORIGIN", "*"),
        }
    }
}

// ── Engine ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Directory holding `<engine>/<report>.sql` templates.
    pub templates_dir: PathBuf,
    /// Optional YAML file overriding business thresholds.
    pub thresholds_path: Option<PathBuf>,
    /// Fixed "today" for date filters; `None` means the current UTC date.
    pub reference_date: Option<NaiveDate>,
    pub default_limit: u32,
    pub max_limit: u32,
}

impl EngineConfig {
    fn from_env_profiled(p: &str) -> Self {
        let reference_date = profiled_env_opt(p, "ATELIER_REFERENCE_DATE").and_then(|raw| {
            match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(e) => {
                    tracing::warn!(value = %raw, error = %e, "Ignoring invalid ATELIER_REFERENCE_DATE");
                    None
                }
            }
        });

        let max_limit = profiled_env_u32(p, "ATELIER_MAX_LIMIT", 500).max(1);
        Self {
            templates_dir: PathBuf::from(profiled_env_or(p, "ATELIER_TEMPLATES_DIR", "queries")),
            thresholds_path: profiled_env_opt(p, "ATELIER_THRESHOLDS_PATH").map(PathBuf::from),
            reference_date,
            default_limit: profiled_env_u32(p, "ATELIER_DEFAULT_LIMIT", 100).clamp(1, max_limit),
            max_limit,
        }
    }

    /// The date treated as "today" when resolving relative time periods.
    pub fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| chrono::Utc::now().date_naive())
    }
}

// ── Tests ────────────────────────────────────────────────────
