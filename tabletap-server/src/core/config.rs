//! Server configuration

use std::path::PathBuf;

/// Server configuration
///
/// # Environment variables
///
/// Every item can be overridden through the environment:
///
/// | Variable | Default | Purpose |
/// |----------|---------|---------|
/// | WORK_DIR | /var/lib/tabletap | Working directory (database, logs) |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | PUBLIC_ORIGIN | http://localhost:3000 | Origin baked into QR links |
/// | POLL_INTERVAL_SECS | 10 | New-order poll fallback interval |
/// | AUTH_DELAY_MS | 1000 | Artificial login/register latency |
/// | ENVIRONMENT | development | development \| staging \| production |
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory holding the redb database and log files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Absolute origin of the customer-facing frontend; QR payloads are
    /// built as `{public_origin}/menu/{owner}?table={table}`
    pub public_origin: String,
    /// Polling fallback interval for new-order detection (seconds)
    pub poll_interval_secs: u64,
    /// Fixed artificial delay applied to login/register (milliseconds)
    pub auth_delay_ms: u64,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/tabletap".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            public_origin: std::env::var("PUBLIC_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            poll_interval_secs: std::env::var("POLL_INTERVAL_SECS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10),
            auth_delay_ms: std::env::var("AUTH_DELAY_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(1000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override the bits tests care about
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        // Keep tests fast
        config.auth_delay_ms = 0;
        config
    }

    /// Path of the redb database file
    pub fn db_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("tabletap.redb")
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
