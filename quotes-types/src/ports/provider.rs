//! Upstream rate provider port.
//!
//! Implementations can be HTTP clients for a vendor API, stubs, etc.

use crate::domain::ExchangeRate;
use crate::error::QuoteError;

/// Port trait for upstream exchange rate sources.
#[async_trait::async_trait]
pub trait RateProvider: Send + Sync + 'static {
    /// Fetches the current USD/BRL quote as a fresh, unpersisted record.
    ///
    /// Implementations bound the call by their own deadline and report
    /// failures with the `Timeout`, `FetchFailed` or `DecodeFailed` kinds.
    async fn fetch(&self) -> Result<ExchangeRate, QuoteError>;
}
