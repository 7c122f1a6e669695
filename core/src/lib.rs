//! Synchronous client core for the Random.org true-random integer service.
//!
//! # Overview
//! Validates a `(min, max)` range, builds the single GET request the service
//! expects, executes it with a bounded timeout and parses the plain-text
//! answer into an `i64`. Every failure surfaces as a `RandomError` from a
//! closed taxonomy.
//!
//! # Design
//! - `RandomOrgClient` is stateless; it holds only constant `ClientConfig`
//!   and a `Transport`.
//! - Requests and responses are plain data (`HttpRequest` / `HttpResponse`),
//!   so a host can do the I/O itself between `build_request` and
//!   `parse_response`.
//! - Raw transport failures are described as `TransportFailure` and mapped by
//!   `classify` with first-match-wins rules.
//! - No retries, no caching: one invocation, at most one request.

pub mod classify;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;
pub mod validate;

pub use classify::classify;
pub use client::{parse_random_number, RandomOrgClient};
pub use config::ClientConfig;
pub use error::{ConfigError, ErrorKind, RandomError};
pub use http::{HttpRequest, HttpResponse, TransportFailure};
pub use transport::{Transport, UreqTransport};
pub use types::{FailedItem, GeneratedNumber, ItemOutcome, Range};
pub use validate::validate;

/// Fetch one integer in `[min, max]` from the production endpoint with the
/// default configuration.
pub fn generate_random_number(min: f64, max: f64) -> Result<i64, RandomError> {
    RandomOrgClient::with_config(ClientConfig::default()).generate_random_number(min, max)
}
