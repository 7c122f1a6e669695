//! Error types for the Random.org client.
//!
//! # Design
//! The taxonomy is closed: every failure a caller can observe is one of the
//! `RandomError` variants, and each variant carries only the human-readable
//! message that `Display` prints verbatim. Raw transport errors never cross
//! the client boundary; they are described as a `TransportFailure` and
//! mapped by `classify`.

use thiserror::Error;

/// Errors returned by `RandomOrgClient` and the free functions of this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RandomError {
    /// The caller supplied a malformed range. Never reaches the network.
    #[error("{0}")]
    InvalidInput(String),

    /// The request exceeded its time budget.
    #[error("{0}")]
    Timeout(String),

    /// The service answered 503.
    #[error("{0}")]
    ServiceUnavailable(String),

    /// The service answered 400.
    #[error("{0}")]
    BadRequest(String),

    /// The service answered with a 5xx status other than 503.
    #[error("{0}")]
    ServerError(String),

    /// Any other transport-layer failure.
    #[error("{0}")]
    Connection(String),

    /// The transport succeeded but the body was not an integer.
    #[error("{0}")]
    Parse(String),

    /// A failure not recognized as transport-related.
    #[error("{0}")]
    Unknown(String),
}

/// Field-less discriminant of `RandomError`, for callers that branch on the
/// category (the FFI layer maps it to stable numeric codes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    Timeout,
    ServiceUnavailable,
    BadRequest,
    ServerError,
    Connection,
    Parse,
    Unknown,
}

impl RandomError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RandomError::InvalidInput(_) => ErrorKind::InvalidInput,
            RandomError::Timeout(_) => ErrorKind::Timeout,
            RandomError::ServiceUnavailable(_) => ErrorKind::ServiceUnavailable,
            RandomError::BadRequest(_) => ErrorKind::BadRequest,
            RandomError::ServerError(_) => ErrorKind::ServerError,
            RandomError::Connection(_) => ErrorKind::Connection,
            RandomError::Parse(_) => ErrorKind::Parse,
            RandomError::Unknown(_) => ErrorKind::Unknown,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            RandomError::InvalidInput(msg)
            | RandomError::Timeout(msg)
            | RandomError::ServiceUnavailable(msg)
            | RandomError::BadRequest(msg)
            | RandomError::ServerError(msg)
            | RandomError::Connection(msg)
            | RandomError::Parse(msg)
            | RandomError::Unknown(msg) => msg,
        }
    }
}

/// Errors raised while loading `ClientConfig` from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?} ({reason})")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_bare_message() {
        let err = RandomError::Timeout("Request to Random.org API timed out. Please try again.".into());
        assert_eq!(err.to_string(), "Request to Random.org API timed out. Please try again.");
        assert_eq!(err.message(), err.to_string());
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(RandomError::Parse(String::new()).kind(), ErrorKind::Parse);
        assert_eq!(RandomError::Unknown(String::new()).kind(), ErrorKind::Unknown);
        assert_eq!(RandomError::InvalidInput(String::new()).kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn config_error_names_the_variable() {
        let err = ConfigError::InvalidValue {
            var: "RANDOM_ORG_TIMEOUT_MS",
            value: "soon".into(),
            reason: "invalid digit found in string".into(),
        };
        assert!(err.to_string().contains("RANDOM_ORG_TIMEOUT_MS"));
        assert!(err.to_string().contains("\"soon\""));
    }
}
