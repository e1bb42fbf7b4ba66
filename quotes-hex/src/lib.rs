//! # Quotes Hex
//!
//! Application service layer plus the inbound and outbound adapters of the
//! quote server.
//!
//! ## Architecture
//!
//! - `service/` - Application service (fetch, then persist)
//! - `outbound/` - Upstream vendor client and the deadline-bound persister
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over `P: RateProvider` and
//! `R: ExchangeRateRepository`, allowing different adapters to be injected.

pub mod inbound;
pub mod outbound;
pub mod service;


pub use outbound::{AwesomeApiProvider, PersistConfig, Persister, UpstreamConfig};
pub use service::QuoteService;
