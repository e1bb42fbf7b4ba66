//! # Quotes Client SDK
//!
//! A typed Rust client for the quote API. Every call is a single attempt
//! bounded by the configured deadline.

mod writer;

use std::time::Duration;

use quotes_types::{ExchangeRateResponse, QuoteError, Stage};
use reqwest::{Client, StatusCode};

pub use writer::{DEFAULT_OUTPUT_PATH, QUOTE_LABEL, format_quote, write_quote};

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

/// Client-side configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    /// Covers connecting, sending and reading the whole body.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVER_URL.to_string(),
            timeout: Duration::from_millis(300),
        }
    }
}

/// Quote API client.
pub struct QuotesClient {
    base_url: String,
    timeout: Duration,
    http: Client,
}

impl QuotesClient {
    /// Creates a new client.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout,
            http: Client::new(),
        }
    }

    /// Fetches the current bid from `GET /cotacao`.
    ///
    /// Transport failures and any status other than 200 come back as
    /// `FetchFailed`, an undecodable body as `DecodeFailed` and an elapsed
    /// deadline as `Timeout`. Nothing is retried.
    pub async fn quote(&self) -> Result<ExchangeRateResponse, QuoteError> {
        let url = format!("{}/cotacao", self.base_url);

        let body = match tokio::time::timeout(self.timeout, self.get_body(&url)).await {
            Ok(body) => body?,
            Err(_) => {
                tracing::warn!(%url, "Quote request timed out");
                return Err(QuoteError::timeout(Stage::Fetch, self.timeout));
            }
        };

        ExchangeRateResponse::decode(&body)
    }

    async fn get_body(&self, url: &str) -> Result<Vec<u8>, QuoteError> {
        let resp = self.http.get(url).send().await.map_err(|e| {
            tracing::warn!(error = %e, "Quote request failed");
            QuoteError::fetch_failed(e)
        })?;

        let status = resp.status();
        if status != StatusCode::OK {
            let message = resp.text().await.unwrap_or_default();
            return Err(QuoteError::fetch_failed(format!(
                "server responded with status {}: {}",
                status, message
            )));
        }

        let body = resp.bytes().await.map_err(QuoteError::fetch_failed)?;
        Ok(body.to_vec())
    }
}
