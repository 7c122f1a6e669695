//! Executes an `HttpRequest` against the network.
//!
//! `Transport` is the seam between the deterministic core and I/O. The
//! bundled `UreqTransport` builds a fresh agent per call so nothing (pooled
//! connections included) outlives the invocation.

use crate::http::{HttpRequest, HttpResponse, TransportFailure};

/// Performs exactly one round-trip for a request.
///
/// Non-success statuses are returned as data (`Ok(HttpResponse)`); only
/// failures to obtain a response at all are `Err`.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportFailure>;
}

/// Blocking transport backed by `ureq`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UreqTransport;

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportFailure> {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(request.timeout))
            .build()
            .new_agent();

        let mut builder = agent.get(request.url.as_str());
        for (key, value) in &request.query {
            builder = builder.query(key.as_str(), value.as_str());
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let mut response = builder.call()?;
        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string()?;

        Ok(HttpResponse { status, body })
    }
}
