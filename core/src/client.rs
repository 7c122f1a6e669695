//! Request builder, response parser and the one-call generation flow.
//!
//! # Design
//! `RandomOrgClient` holds only constant configuration and a transport, and
//! carries no mutable state between calls. A generation is split the same way
//! as any host-does-IO client: `build_request` produces an `HttpRequest`,
//! the transport executes it, and `parse_response` consumes the
//! `HttpResponse`. `generate_random_number` chains the three for callers that
//! are happy to let the bundled transport do the I/O.

use tracing::{debug, warn};

use crate::classify::classify;
use crate::config::ClientConfig;
use crate::error::RandomError;
use crate::http::{HttpRequest, HttpResponse, TransportFailure};
use crate::transport::{Transport, UreqTransport};
use crate::types::{FailedItem, GeneratedNumber, ItemOutcome, Range};
use crate::validate::validate;

pub const MSG_INVALID_RESPONSE: &str = "Invalid response from Random.org API";

/// Synchronous, stateless client for the Random.org integer generator.
#[derive(Debug, Clone)]
pub struct RandomOrgClient<T = UreqTransport> {
    config: ClientConfig,
    transport: T,
}

impl RandomOrgClient<UreqTransport> {
    /// Client for `base_url` with the default timeout and header.
    pub fn new(base_url: &str) -> Self {
        Self::with_config(ClientConfig::default().with_endpoint(base_url))
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self::with_transport(config, UreqTransport)
    }
}

impl Default for RandomOrgClient<UreqTransport> {
    fn default() -> Self {
        Self::with_config(ClientConfig::default())
    }
}

impl<T: Transport> RandomOrgClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch one true-random integer in `[min, max]`.
    ///
    /// Validation errors are returned unchanged and never reach the network.
    /// Exactly one request is issued otherwise; transport and status failures
    /// come back classified.
    pub fn generate_random_number(&self, min: f64, max: f64) -> Result<i64, RandomError> {
        let range = validate(min, max)?;
        self.generate_in(range)
    }

    /// Like `generate_random_number`, for a range that is already validated.
    pub fn generate_in(&self, range: Range) -> Result<i64, RandomError> {
        let request = self.build_request(&range);
        debug!(url = %request.full_url(), timeout_ms = request.timeout.as_millis() as u64, "requesting random integer");

        let result = self
            .transport
            .execute(&request)
            .map_err(classify)
            .and_then(|response| self.parse_response(response));

        match &result {
            Ok(value) => debug!(value, "received random integer"),
            Err(err) => warn!(kind = ?err.kind(), error = %err, "random integer request failed"),
        }
        result
    }

    /// Generate one value and wrap the outcome in the record handed back to a
    /// host. Never fails: errors become a `FailedItem`.
    pub fn generate_item(&self, min: f64, max: f64) -> ItemOutcome {
        let generated = validate(min, max).and_then(|range| {
            self.generate_in(range)
                .map(|value| GeneratedNumber::new(value, range))
        });
        match generated {
            Ok(record) => ItemOutcome::Generated(record),
            Err(err) => ItemOutcome::Failed(FailedItem::from_error(&err)),
        }
    }

    /// Build the GET request for `range`.
    pub fn build_request(&self, range: &Range) -> HttpRequest {
        let query = [
            ("num", "1".to_string()),
            ("min", range.min().to_string()),
            ("max", range.max().to_string()),
            ("col", "1".to_string()),
            ("base", "10".to_string()),
            ("format", "plain".to_string()),
            ("rnd", "new".to_string()),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        HttpRequest {
            url: self.config.endpoint.clone(),
            query,
            headers: vec![("User-Agent".to_string(), self.config.user_agent.clone())],
            timeout: self.config.timeout,
        }
    }

    /// Interpret the response to a request built by `build_request`.
    pub fn parse_response(&self, response: HttpResponse) -> Result<i64, RandomError> {
        if !response.is_success() {
            return Err(classify(TransportFailure::status(response.status)));
        }
        parse_random_number(&response.body)
    }
}

/// Parse a plain-text body into an integer.
///
/// Surrounding whitespace is trimmed, then the leading run of an optional
/// sign and decimal digits is parsed; anything after it is ignored. No check
/// against the requested range is made.
pub fn parse_random_number(text: &str) -> Result<i64, RandomError> {
    let trimmed = text.trim();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digits_len = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return Err(RandomError::Parse(MSG_INVALID_RESPONSE.to_string()));
    }
    trimmed[..sign_len + digits_len]
        .parse()
        .map_err(|_| RandomError::Parse(MSG_INVALID_RESPONSE.to_string()))
}
