//! AwesomeAPI upstream client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use quotes_types::{ExchangeRate, QuoteError, RateProvider, Stage, VendorQuoteResponse};

pub const DEFAULT_UPSTREAM_URL: &str = "https://economia.awesomeapi.com.br/json/last/USD-BRL";

/// Where and how long to ask the vendor for a quote.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub url: String,
    /// Covers connecting, sending and reading the whole body.
    pub timeout: Duration,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_UPSTREAM_URL.to_string(),
            timeout: Duration::from_millis(200),
        }
    }
}

/// Upstream fetcher for the AwesomeAPI `json/last/USD-BRL` endpoint.
///
/// Makes a single attempt per call; nothing is retried or cached.
pub struct AwesomeApiProvider {
    config: UpstreamConfig,
    http: Client,
}

impl AwesomeApiProvider {
    pub fn new(config: UpstreamConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: UpstreamConfig, http: Client) -> Self {
        Self { config, http }
    }

    pub fn config(&self) -> &UpstreamConfig {
        &self.config
    }

    async fn fetch_body(&self) -> Result<Vec<u8>, QuoteError> {
        let resp = self
            .http
            .get(&self.config.url)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Upstream request failed");
                QuoteError::fetch_failed(e)
            })?;

        let status = resp.status();
        if status != StatusCode::OK {
            tracing::warn!(%status, "Upstream responded with unexpected status");
            return Err(QuoteError::fetch_failed(format!(
                "upstream responded with status {}",
                status
            )));
        }

        let body = resp.bytes().await.map_err(|e| {
            tracing::warn!(error = %e, "Failed reading upstream body");
            QuoteError::fetch_failed(e)
        })?;

        Ok(body.to_vec())
    }
}

#[async_trait]
impl RateProvider for AwesomeApiProvider {
    #[tracing::instrument(skip(self), fields(url = %self.config.url))]
    async fn fetch(&self) -> Result<ExchangeRate, QuoteError> {
        let deadline = self.config.timeout;

        let body = match tokio::time::timeout(deadline, self.fetch_body()).await {
            Ok(body) => body?,
            Err(_) => {
                tracing::warn!(deadline_ms = deadline.as_millis() as u64, "Upstream timed out");
                return Err(QuoteError::timeout(Stage::Fetch, deadline));
            }
        };

        VendorQuoteResponse::decode(&body).inspect_err(|e| {
            tracing::warn!(detail = %e.detail(), "Upstream body could not be decoded");
        })
    }
}
