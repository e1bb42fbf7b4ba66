//! Domain models for the quote service.

pub mod exchange_rate;

pub use exchange_rate::{ExchangeRate, ExchangeRateId};
