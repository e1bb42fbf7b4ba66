//! Exchange rate domain model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dto::ExchangeRateResponse;

/// Unique identifier for an ExchangeRate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExchangeRateId(Uuid);

impl ExchangeRateId {
    /// Creates a new random ExchangeRateId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an ExchangeRateId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ExchangeRateId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ExchangeRateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ExchangeRateId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A USD/BRL quote as recorded by this system.
///
/// Rates are immutable once created. One is produced per successful
/// upstream fetch and is never updated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Unique identifier
    pub id: ExchangeRateId,
    /// Purchase price of one USD in BRL
    pub bid: Decimal,
    /// When the store recorded the rate
    pub created_at: DateTime<Utc>,
    /// Mirrors `created_at`; rates are never updated
    pub updated_at: DateTime<Utc>,
}

impl ExchangeRate {
    /// Creates a fresh, not yet persisted rate.
    ///
    /// The timestamps are provisional: the store stamps its own on insert.
    pub fn new(bid: Decimal) -> Self {
        let now = Utc::now();
        Self {
            id: ExchangeRateId::new(),
            bid,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstructs a rate from database fields.
    pub fn from_parts(
        id: ExchangeRateId,
        bid: Decimal,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            bid,
            created_at,
            updated_at,
        }
    }

    /// Projects the rate onto the public wire shape.
    pub fn to_response(&self) -> ExchangeRateResponse {
        ExchangeRateResponse { bid: self.bid }
    }
}
