//! Maps raw outbound-call failures onto the closed `RandomError` taxonomy.
//!
//! Rules are tried top to bottom and the first match wins; 503 has to be
//! checked before the generic 5xx rule.

use crate::error::RandomError;
use crate::http::TransportFailure;

pub const MSG_TIMEOUT: &str = "Request to Random.org API timed out. Please try again.";
pub const MSG_SERVICE_UNAVAILABLE: &str =
    "Random.org API is temporarily unavailable. Please try again later.";
pub const MSG_BAD_REQUEST: &str = "Invalid parameters sent to Random.org API.";
pub const MSG_SERVER_ERROR: &str = "Random.org API server error. Please try again later.";

/// Classify a failed outbound call.
pub fn classify(failure: TransportFailure) -> RandomError {
    match failure {
        TransportFailure::TimedOut => RandomError::Timeout(MSG_TIMEOUT.to_string()),
        TransportFailure::Status { status: 503, .. } => {
            RandomError::ServiceUnavailable(MSG_SERVICE_UNAVAILABLE.to_string())
        }
        TransportFailure::Status { status: 400, .. } => {
            RandomError::BadRequest(MSG_BAD_REQUEST.to_string())
        }
        TransportFailure::Status { status, .. } if status >= 500 => {
            RandomError::ServerError(MSG_SERVER_ERROR.to_string())
        }
        TransportFailure::Status { message, .. } | TransportFailure::Connection(message) => {
            RandomError::Connection(format!("Failed to connect to Random.org API: {message}"))
        }
        TransportFailure::Other(message) => {
            RandomError::Unknown(format!("Error generating random number: {message}"))
        }
    }
}
