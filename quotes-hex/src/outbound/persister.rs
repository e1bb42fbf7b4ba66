//! Deadline-bound writes into the exchange rate store.

use std::time::Duration;

use quotes_types::{ExchangeRate, ExchangeRateRepository, QuoteError, Stage};

#[derive(Debug, Clone)]
pub struct PersistConfig {
    pub timeout: Duration,
}

impl Default for PersistConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(10),
        }
    }
}

/// Stores one rate per call, bounded by its own deadline.
///
/// A write that misses the deadline is dropped, not retried. Store
/// concurrency is left to the repository.
pub struct Persister<R: ExchangeRateRepository> {
    repo: R,
    config: PersistConfig,
}

impl<R: ExchangeRateRepository> Persister<R> {
    pub fn new(repo: R, config: PersistConfig) -> Self {
        Self { repo, config }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    #[tracing::instrument(skip(self, rate), fields(id = %rate.id, bid = %rate.bid))]
    pub async fn save(&self, rate: ExchangeRate) -> Result<ExchangeRate, QuoteError> {
        let deadline = self.config.timeout;

        match tokio::time::timeout(deadline, self.repo.create(rate)).await {
            Ok(Ok(saved)) => Ok(saved),
            Ok(Err(e)) => {
                tracing::error!(error = %e, "Store rejected exchange rate");
                Err(e.into())
            }
            Err(_) => {
                tracing::warn!(deadline_ms = deadline.as_millis() as u64, "Store write timed out");
                Err(QuoteError::timeout(Stage::Persist, deadline))
            }
        }
    }
}
