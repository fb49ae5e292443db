//! Connection configuration types.
//!
//! Responsibilities:
//! - Define connection settings (URL, organization, TLS verification, timeout).
//! - Define the main `Config` structure combining connection and auth.
//!
//! Invariants:
//! - `base_url` never carries a trailing slash once produced by the loader.
//! - `Config` is immutable after construction; the client copies what it needs.

use crate::constants::{DEFAULT_ORG_ID, DEFAULT_TIMEOUT_SECS};
use crate::types::auth::AuthConfig;
use secrecy::SecretString;
use std::time::Duration;

/// Connection settings for a Grafana instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Base URL of the Grafana server (e.g., https://grafana.example.com)
    pub base_url: String,
    /// Organization id the credential belongs to
    pub org_id: String,
    /// Whether TLS certificates are verified
    pub verify_ssl: bool,
    /// Per-request timeout
    pub timeout: Duration,
}

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
}

impl Config {
    /// Create a config with default connection settings for the given URL and token.
    ///
    /// The URL is used as-is; callers that accept user input should go
    /// through [`crate::ConfigLoader`] for validation and normalization.
    pub fn with_token(base_url: String, token: SecretString) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                org_id: DEFAULT_ORG_ID.to_string(),
                verify_ssl: true,
                timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            },
            auth: AuthConfig::new(token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_token_uses_defaults() {
        let config = Config::with_token(
            "https://grafana.example.com".to_string(),
            SecretString::new("test-token".to_string().into()),
        );

        assert_eq!(config.connection.org_id, "1");
        assert!(config.connection.verify_ssl);
        assert_eq!(config.connection.timeout, Duration::from_secs(30));
    }
}
