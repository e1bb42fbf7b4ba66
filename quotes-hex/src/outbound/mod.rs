//! Outbound adapters: the upstream vendor client and the store writer.

mod awesomeapi;
mod persister;

pub use awesomeapi::{AwesomeApiProvider, DEFAULT_UPSTREAM_URL, UpstreamConfig};
pub use persister::{PersistConfig, Persister};
