//! Constant client configuration.
//!
//! The defaults are the production Random.org endpoint, a 10 second budget
//! and the fixed identification header. `from_env` lets a deployment point
//! the client elsewhere without recompiling.

use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_ENDPOINT: &str = "https://www.random.org/integers/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);
pub const USER_AGENT: &str = "n8n-custom-node-random/1.0.0";

pub const ENV_ENDPOINT: &str = "RANDOM_ORG_ENDPOINT";
pub const ENV_TIMEOUT_MS: &str = "RANDOM_ORG_TIMEOUT_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `RANDOM_ORG_ENDPOINT` and `RANDOM_ORG_TIMEOUT_MS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(endpoint) = lookup(ENV_ENDPOINT) {
            config = config.with_endpoint(&endpoint);
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            let millis: u64 = raw.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidValue {
                    var: ENV_TIMEOUT_MS,
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?;
            config.timeout = Duration::from_millis(millis);
        }
        Ok(config)
    }

    /// Replace the endpoint, normalizing it to end in exactly one `/`.
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = format!("{}/", endpoint.trim_end_matches('/'));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, "https://www.random.org/integers/");
        assert_eq!(config.timeout, Duration::from_millis(10_000));
        assert_eq!(config.user_agent, "n8n-custom-node-random/1.0.0");
    }

    #[test]
    fn endpoint_gets_single_trailing_slash() {
        let config = ClientConfig::default().with_endpoint("http://127.0.0.1:3000/integers");
        assert_eq!(config.endpoint, "http://127.0.0.1:3000/integers/");
        let config = ClientConfig::default().with_endpoint("http://127.0.0.1:3000/integers//");
        assert_eq!(config.endpoint, "http://127.0.0.1:3000/integers/");
    }

    #[test]
    fn lookup_overrides_defaults() {
        let config = ClientConfig::from_lookup(|var| match var {
            ENV_ENDPOINT => Some("http://localhost:3000/integers".to_string()),
            ENV_TIMEOUT_MS => Some("250".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.endpoint, "http://localhost:3000/integers/");
        assert_eq!(config.timeout, Duration::from_millis(250));
    }

    #[test]
    fn empty_lookup_is_default() {
        let config = ClientConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    // The only test in this crate that touches these variables.
    #[test]
    fn from_env_reads_process_environment() {
        std::env::set_var(ENV_ENDPOINT, "http://127.0.0.1:4000/integers");
        std::env::set_var(ENV_TIMEOUT_MS, "1500");
        let loaded = ClientConfig::from_env();
        std::env::set_var(ENV_TIMEOUT_MS, "later");
        let rejected = ClientConfig::from_env();
        std::env::remove_var(ENV_ENDPOINT);
        std::env::remove_var(ENV_TIMEOUT_MS);
        let restored = ClientConfig::from_env();

        let loaded = loaded.unwrap();
        assert_eq!(loaded.endpoint, "http://127.0.0.1:4000/integers/");
        assert_eq!(loaded.timeout, Duration::from_millis(1500));
        assert_eq!(loaded.user_agent, USER_AGENT);
        assert!(matches!(rejected, Err(ConfigError::InvalidValue { var: ENV_TIMEOUT_MS, .. })));
        assert_eq!(restored.unwrap(), ClientConfig::default());
    }

    #[test]
    fn bad_timeout_is_rejected() {
        let err = ClientConfig::from_lookup(|var| (var == ENV_TIMEOUT_MS).then(|| "ten".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var: ENV_TIMEOUT_MS, .. }));
    }
}
