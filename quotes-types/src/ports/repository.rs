//! Repository port trait.
//!
//! The persistent store behind the quote pipeline. Adapters own the
//! connection and schema; deadlines are applied by the caller.

use crate::domain::{ExchangeRate, ExchangeRateId};
use crate::error::RepoError;

/// Storage port for exchange rates.
#[async_trait::async_trait]
pub trait ExchangeRateRepository: Send + Sync + 'static {
    /// Inserts a new row and returns it with store-assigned timestamps.
    ///
    /// Every call produces a new row; no deduplication happens.
    async fn create(&self, rate: ExchangeRate) -> Result<ExchangeRate, RepoError>;

    /// Gets a rate by ID.
    async fn get(&self, id: ExchangeRateId) -> Result<Option<ExchangeRate>, RepoError>;

    /// Counts stored rates.
    async fn count(&self) -> Result<i64, RepoError>;
}
