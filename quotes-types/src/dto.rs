//! Data Transfer Objects at the HTTP boundaries.
//!
//! `VendorQuoteResponse` mirrors the upstream vendor payload and lives only
//! long enough to be turned into an [`ExchangeRate`]. `ExchangeRateResponse`
//! is what this service serves and what the client reads back.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::ExchangeRate;
use crate::error::QuoteError;

// ─────────────────────────────────────────────────────────────────────────────
// Vendor (upstream) shape
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level vendor payload, keyed by currency pair.
#[derive(Debug, Clone, Deserialize)]
pub struct VendorQuoteResponse {
    #[serde(rename = "USDBRL")]
    pub usdbrl: VendorQuote,
}

/// A single vendor quote. Every field is a string on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct VendorQuote {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub codein: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub high: String,
    #[serde(default)]
    pub low: String,
    #[serde(default, rename = "varBid")]
    pub var_bid: String,
    #[serde(default, rename = "pctChange")]
    pub pct_change: String,
    pub bid: String,
    #[serde(default)]
    pub ask: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub create_date: String,
}

impl VendorQuoteResponse {
    /// Decodes a raw vendor body straight into a fresh canonical record.
    pub fn decode(body: &[u8]) -> Result<ExchangeRate, QuoteError> {
        let payload: VendorQuoteResponse =
            serde_json::from_slice(body).map_err(QuoteError::decode_failed)?;
        payload.into_exchange_rate()
    }

    /// Converts the vendor quote into a canonical record, dropping every
    /// field but the bid.
    pub fn into_exchange_rate(self) -> Result<ExchangeRate, QuoteError> {
        let bid = parse_bid(&self.usdbrl.bid)?;
        Ok(ExchangeRate::new(bid))
    }
}

/// Parses a bid string into an exact decimal.
///
/// Values that would need rounding to fit are rejected, as are zero and
/// negative prices.
pub fn parse_bid(raw: &str) -> Result<Decimal, QuoteError> {
    let bid = Decimal::from_str_exact(raw)
        .map_err(|e| QuoteError::decode_failed(format!("invalid bid {:?}: {}", raw, e)))?;
    ensure_positive(bid)
}

fn ensure_positive(bid: Decimal) -> Result<Decimal, QuoteError> {
    if bid.is_sign_negative() || bid.is_zero() {
        return Err(QuoteError::decode_failed(format!(
            "bid must be positive, got {}",
            bid
        )));
    }
    Ok(bid)
}

// ─────────────────────────────────────────────────────────────────────────────
// Service (wire) shape
// ─────────────────────────────────────────────────────────────────────────────

/// Response body of `GET /cotacao`.
///
/// The bid is serialized as a JSON string so no precision is lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRateResponse {
    pub bid: Decimal,
}

impl ExchangeRateResponse {
    /// Decodes a body served by this service.
    pub fn decode(body: &[u8]) -> Result<Self, QuoteError> {
        let response: ExchangeRateResponse =
            serde_json::from_slice(body).map_err(QuoteError::decode_failed)?;
        ensure_positive(response.bid)?;
        Ok(response)
    }
}
