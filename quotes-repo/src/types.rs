//! Database row types.
//!
//! SQLite has no decimal column type, so bids are stored as their exact
//! string representation and parsed back on read.

use std::str::FromStr;

use rust_decimal::Decimal;
use sqlx::FromRow;

use quotes_types::{ExchangeRate, ExchangeRateId, RepoError};

/// Exchange rate row from database.
#[derive(FromRow)]
pub struct DbExchangeRate {
    pub id: String,
    pub bid: String,
    pub created_at: String,
    pub updated_at: String,
}

impl DbExchangeRate {
    /// Convert database row to domain ExchangeRate.
    pub fn into_domain(self) -> Result<ExchangeRate, RepoError> {
        let id = ExchangeRateId::from_str(&self.id)
            .map_err(|e| RepoError::Corrupt(format!("id {:?}: {}", self.id, e)))?;

        let bid = Decimal::from_str_exact(&self.bid)
            .map_err(|e| RepoError::Corrupt(format!("bid {:?}: {}", self.bid, e)))?;

        let created_at = parse_timestamp(&self.created_at)?;
        let updated_at = parse_timestamp(&self.updated_at)?;

        Ok(ExchangeRate::from_parts(id, bid, created_at, updated_at))
    }
}

fn parse_timestamp(s: &str) -> Result<chrono::DateTime<chrono::Utc>, RepoError> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&chrono::Utc))
        .map_err(|e| RepoError::Corrupt(format!("timestamp {:?}: {}", s, e)))
}
