//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that merges environment values
//!   with explicit overrides.
//! - Validate and normalize the merged values into a `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Explicit overrides take precedence over environment variables,
//!   regardless of the order `from_env()` and `with_*` are called in.
//! - TLS verification stays on unless the caller or `GRAFANA_VERIFY_SSL`
//!   turns it off.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

use super::env::{apply_env, non_blank};
use super::error::ConfigError;
use crate::constants::{DEFAULT_ORG_ID, DEFAULT_TIMEOUT_SECS, ENV_URL, MAX_TIMEOUT_SECS};
use crate::types::{AuthConfig, Config, ConnectionConfig};

/// A value supplied either explicitly by the caller or by the environment.
#[derive(Debug)]
struct Layered<T> {
    explicit: Option<T>,
    env: Option<T>,
}

impl<T> Default for Layered<T> {
    fn default() -> Self {
        Self {
            explicit: None,
            env: None,
        }
    }
}

impl<T> Layered<T> {
    fn resolve(self) -> Option<T> {
        self.explicit.or(self.env)
    }
}

/// Configuration loader that builds config from environment variables and
/// explicit overrides.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    base_url: Layered<String>,
    token: Layered<SecretString>,
    org_id: Layered<String>,
    timeout: Layered<Duration>,
    verify_ssl: Layered<bool>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the base URL explicitly.
    ///
    /// Explicit strings are trimmed like environment values; a blank one
    /// leaves the environment value in effect.
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url.explicit = non_blank(url);
        self
    }

    /// Set the bearer token explicitly.
    pub fn with_token(mut self, token: String) -> Self {
        self.token.explicit = non_blank(token).map(|t| SecretString::new(t.into()));
        self
    }

    /// Set the organization id explicitly.
    pub fn with_org_id(mut self, org_id: String) -> Self {
        self.org_id.explicit = non_blank(org_id);
        self
    }

    /// Set the request timeout explicitly.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout.explicit = Some(timeout);
        self
    }

    /// Set whether TLS certificates are verified.
    ///
    /// Passing `true` does not override `GRAFANA_VERIFY_SSL=false`; both the
    /// caller and the environment must allow verification for it to stay on.
    pub fn with_verify_ssl(mut self, verify: bool) -> Self {
        self.verify_ssl.explicit = Some(verify);
        self
    }

    /// Build the final configuration.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingBaseUrl`] if no base URL was provided.
    /// - [`ConfigError::MissingToken`] if no token was provided.
    /// - [`ConfigError::InvalidValue`] if the base URL is not an http(s) URL.
    /// - [`ConfigError::InvalidTimeout`] if the timeout is out of range.
    pub fn build(self) -> Result<Config, ConfigError> {
        let base_url = self
            .base_url
            .resolve()
            .as_deref()
            .map(validate_and_normalize_base_url)
            .transpose()?
            .ok_or(ConfigError::MissingBaseUrl)?;

        let token = self
            .token
            .resolve()
            .filter(|t| !t.expose_secret().trim().is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let org_id = self
            .org_id
            .resolve()
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| DEFAULT_ORG_ID.to_string());

        let verify_ssl =
            self.verify_ssl.explicit.unwrap_or(true) && self.verify_ssl.env.unwrap_or(true);

        let timeout = self
            .timeout
            .resolve()
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        validate_timeout(timeout)?;

        if !verify_ssl {
            tracing::debug!("TLS certificate verification disabled");
        }

        Ok(Config {
            connection: ConnectionConfig {
                base_url,
                org_id,
                verify_ssl,
                timeout,
            },
            auth: AuthConfig::new(token),
        })
    }

    // Internal setters used by env.rs

    pub(crate) fn set_env_base_url(&mut self, url: Option<String>) {
        self.base_url.env = url;
    }

    pub(crate) fn set_env_token(&mut self, token: Option<SecretString>) {
        self.token.env = token;
    }

    pub(crate) fn set_env_org_id(&mut self, org_id: Option<String>) {
        self.org_id.env = org_id;
    }

    pub(crate) fn set_env_verify_ssl(&mut self, verify: Option<bool>) {
        self.verify_ssl.env = verify;
    }

    pub(crate) fn set_env_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout.env = timeout;
    }
}

/// Validates the request timeout is within `1..=MAX_TIMEOUT_SECS` seconds.
fn validate_timeout(timeout: Duration) -> Result<(), ConfigError> {
    let secs = timeout.as_secs();
    if secs == 0 {
        return Err(ConfigError::InvalidTimeout {
            message: "timeout must be greater than 0 seconds".to_string(),
        });
    }
    if secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::InvalidTimeout {
            message: format!(
                "timeout exceeds maximum allowed value of {} seconds",
                MAX_TIMEOUT_SECS
            ),
        });
    }
    Ok(())
}

/// Validates and normalizes a base URL string.
///
/// Validation rules:
/// - Trim surrounding whitespace
/// - Treat blank/whitespace-only as missing (returns Err(ConfigError::MissingBaseUrl))
/// - Parse as an absolute URL
/// - Require scheme is http or https
/// - Require host is present
/// - Normalize by stripping trailing slashes
fn validate_and_normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::MissingBaseUrl);
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: ENV_URL.into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. https://grafana.example.com): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: ENV_URL.into(),
            message: format!("scheme must be http or https, got: {scheme}"),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: ENV_URL.into(),
            message: "host is required (e.g. https://grafana.example.com)".into(),
        });
    }

    // Url::parse adds a "/" path to bare hosts; sub-path deployments keep their path.
    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
