//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. `RandomOrgClient::build_request`
//! produces an `HttpRequest`, something executes it (the bundled
//! `UreqTransport`, or a host that owns its own HTTP stack), and the
//! resulting `HttpResponse` goes back through `RandomOrgClient::parse_response`.
//! A failed round-trip is described as a `TransportFailure`, the only input
//! the error classifier accepts.
//!
//! All fields use owned types so values can cross the FFI boundary without
//! lifetime concerns. Every request is a GET, so there is no method field.

use std::time::Duration;

/// An outbound GET request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub timeout: Duration,
}

impl HttpRequest {
    /// The URL with the query string appended. Parameter values are decimal
    /// integers and fixed ASCII tokens, so no percent-encoding is needed.
    pub fn full_url(&self) -> String {
        if self.query.is_empty() {
            return self.url.clone();
        }
        let query: Vec<String> = self.query.iter().map(|(k, v)| format!("{k}={v}")).collect();
        format!("{}?{}", self.url, query.join("&"))
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Raw description of a failed outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportFailure {
    /// The time budget elapsed before the call settled.
    TimedOut,
    /// The service answered with a non-success status.
    Status { status: u16, message: String },
    /// Connecting, TLS, or reading the body failed.
    Connection(String),
    /// Not a transport problem at all (e.g. the request could not be built).
    Other(String),
}

impl TransportFailure {
    pub fn status(status: u16) -> Self {
        TransportFailure::Status {
            status,
            message: format!("http status: {status}"),
        }
    }
}

impl From<ureq::Error> for TransportFailure {
    fn from(err: ureq::Error) -> Self {
        match &err {
            ureq::Error::Timeout(_) => TransportFailure::TimedOut,
            ureq::Error::Io(io) if io.kind() == std::io::ErrorKind::TimedOut => {
                TransportFailure::TimedOut
            }
            ureq::Error::StatusCode(status) => TransportFailure::status(*status),
            ureq::Error::BadUri(_) | ureq::Error::Http(_) => TransportFailure::Other(err.to_string()),
            _ => TransportFailure::Connection(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> HttpRequest {
        HttpRequest {
            url: "https://www.random.org/integers/".to_string(),
            query: vec![
                ("num".to_string(), "1".to_string()),
                ("min".to_string(), "-5".to_string()),
            ],
            headers: vec![("User-Agent".to_string(), "agent/1.0".to_string())],
            timeout: Duration::from_millis(10_000),
        }
    }

    #[test]
    fn full_url_appends_query() {
        assert_eq!(request().full_url(), "https://www.random.org/integers/?num=1&min=-5");
    }

    #[test]
    fn full_url_without_query() {
        let mut req = request();
        req.query.clear();
        assert_eq!(req.full_url(), "https://www.random.org/integers/");
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        assert_eq!(request().header("user-agent"), Some("agent/1.0"));
        assert_eq!(request().header("accept"), None);
    }

    #[test]
    fn only_2xx_is_success() {
        let response = |status| HttpResponse {
            status,
            body: String::new(),
        };
        assert!(response(200).is_success());
        assert!(response(299).is_success());
        assert!(!response(199).is_success());
        assert!(!response(304).is_success());
        assert!(!response(503).is_success());
    }

    #[test]
    fn status_failure_describes_code() {
        assert_eq!(
            TransportFailure::status(404),
            TransportFailure::Status {
                status: 404,
                message: "http status: 404".to_string()
            }
        );
    }

    #[test]
    fn ureq_status_maps_to_status() {
        let failure = TransportFailure::from(ureq::Error::StatusCode(503));
        assert!(matches!(failure, TransportFailure::Status { status: 503, .. }));
    }

    #[test]
    fn ureq_io_timeout_maps_to_timed_out() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "deadline");
        assert_eq!(TransportFailure::from(ureq::Error::Io(io)), TransportFailure::TimedOut);
    }

    #[test]
    fn ureq_io_refused_maps_to_connection() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        assert!(matches!(
            TransportFailure::from(ureq::Error::Io(io)),
            TransportFailure::Connection(_)
        ));
    }

    #[test]
    fn ureq_bad_uri_is_not_transport() {
        let failure = TransportFailure::from(ureq::Error::BadUri("nope".to_string()));
        assert!(matches!(failure, TransportFailure::Other(_)));
    }
}
