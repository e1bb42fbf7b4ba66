//! Configuration loading from environment.

use std::env;
use std::time::Duration;

use quotes_hex::{PersistConfig, UpstreamConfig};

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub upstream: UpstreamConfig,
    pub persist: PersistConfig,
    /// OTLP export is only set up when this is present.
    pub otlp_endpoint: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse()
            .map_err(|e| anyhow::anyhow!("PORT must be a port number: {}", e))?;

        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://cotacao.db?mode=rwc".to_string());

        let defaults = UpstreamConfig::default();
        let upstream = UpstreamConfig {
            url: lookup("UPSTREAM_URL").unwrap_or(defaults.url),
            timeout: millis(&lookup, "UPSTREAM_TIMEOUT_MS", defaults.timeout)?,
        };

        let persist = PersistConfig {
            timeout: millis(&lookup, "PERSIST_TIMEOUT_MS", PersistConfig::default().timeout)?,
        };

        let otlp_endpoint = lookup("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|s| !s.is_empty());

        Ok(Self {
            port,
            database_url,
            upstream,
            persist,
            otlp_endpoint,
        })
    }
}

fn millis(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: Duration,
) -> anyhow::Result<Duration> {
    match lookup(key) {
        Some(raw) => {
            let ms: u64 = raw
                .parse()
                .map_err(|e| anyhow::anyhow!("{} must be a number of milliseconds: {}", key, e))?;
            Ok(Duration::from_millis(ms))
        }
        None => Ok(default),
    }
}
