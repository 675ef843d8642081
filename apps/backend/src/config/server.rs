use std::env;
use std::time::Duration;

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;
const DEFAULT_IDLE_TTL_SECS: u64 = 6 * 60 * 60;
const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 60;

/// Process configuration, read once at start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Sessions idle at least this long are evicted by the sweep.
    pub session_idle_ttl: Duration,
    pub session_sweep_interval: Duration,
    /// Validated `http(s)://` origins; empty means the localhost fallback.
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            session_idle_ttl: Duration::from_secs(DEFAULT_IDLE_TTL_SECS),
            session_sweep_interval: Duration::from_secs(DEFAULT_SWEEP_INTERVAL_SECS),
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Build from process environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Unset variables take defaults;
    /// set but unparsable ones are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup("BACKEND_HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("BACKEND_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config(format!("BACKEND_PORT must be a valid port number, got '{raw}'"))
            })?,
            None => DEFAULT_PORT,
        };

        let session_idle_ttl = positive_secs(
            "SESSION_IDLE_TTL_SECS",
            lookup("SESSION_IDLE_TTL_SECS"),
            DEFAULT_IDLE_TTL_SECS,
        )?;
        let session_sweep_interval = positive_secs(
            "SESSION_SWEEP_INTERVAL_SECS",
            lookup("SESSION_SWEEP_INTERVAL_SECS"),
            DEFAULT_SWEEP_INTERVAL_SECS,
        )?;

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_default();

        Ok(Self {
            host,
            port,
            session_idle_ttl,
            session_sweep_interval,
            cors_allowed_origins,
        })
    }
}

fn positive_secs(name: &str, raw: Option<String>, default: u64) -> Result<Duration, AppError> {
    let Some(raw) = raw else {
        return Ok(Duration::from_secs(default));
    };
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(AppError::config(format!(
            "{name} must be a positive number of seconds, got '{raw}'"
        ))),
    }
}

/// Comma-separated origins, e.g. `http://localhost:3000,https://durak.example`.
/// Empty and `null` entries and non-http(s) schemes are dropped.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect()
}
