//! Quote Application Service
//!
//! Orchestrates the fetch → persist pipeline through the ports.
//! Contains NO infrastructure logic - pure orchestration.

use quotes_types::{ExchangeRate, ExchangeRateRepository, QuoteError, RateProvider};

use crate::outbound::{PersistConfig, Persister};

/// Application service for exchange rate quotes.
///
/// Generic over the upstream provider and the repository, so tests can
/// inject stubs for either side.
pub struct QuoteService<P: RateProvider, R: ExchangeRateRepository> {
    provider: P,
    persister: Persister<R>,
}

impl<P: RateProvider, R: ExchangeRateRepository> QuoteService<P, R> {
    /// Creates a service with the default persist deadline.
    pub fn new(provider: P, repo: R) -> Self {
        Self::with_persist_config(provider, repo, PersistConfig::default())
    }

    pub fn with_persist_config(provider: P, repo: R, config: PersistConfig) -> Self {
        Self {
            provider,
            persister: Persister::new(repo, config),
        }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        self.persister.repo()
    }

    /// Fetches a fresh quote upstream and records it.
    ///
    /// The rate is only returned once it is stored: a fetched value that
    /// cannot be persisted is discarded and the persist error returned.
    #[tracing::instrument(skip(self))]
    pub async fn current_rate(&self) -> Result<ExchangeRate, QuoteError> {
        let rate = self.provider.fetch().await?;
        self.persister.save(rate).await
    }
}
