//! # Quotes Types
//!
//! Domain types and port traits for the USD/BRL quote service.
//! This crate has ZERO external IO dependencies - only data structures,
//! decoding rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - The canonical `ExchangeRate` record
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Vendor and wire shapes at the HTTP boundaries
//! - `error/` - The quote pipeline error taxonomy

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{ExchangeRate, ExchangeRateId};
pub use dto::*;
pub use error::{ErrorKind, QuoteError, RepoError, Stage};
pub use ports::{ExchangeRateRepository, RateProvider};
pub use rust_decimal::Decimal;
