//! Client builder for constructing [`GrafanaClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url, token)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (auth headers, timeout, TLS verification)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`GrafanaClient`] methods)
//! - Reading `GRAFANA_*` variables (handled by [`grafana_config::ConfigLoader`])
//!
//! # Invariants
//! - A missing or blank `base_url` or token fails with [`ClientError::Config`] at build time
//! - The base URL is always normalized to have no trailing slashes
//! - Auth and JSON headers are installed once as default headers; the auth header is sensitive
//! - `verify_ssl(false)` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

use crate::client::GrafanaClient;
use crate::error::{ClientError, Result};
use grafana_config::{
    Config, ConfigError,
    constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_ORG_ID, DEFAULT_TIMEOUT_SECS, ENV_TOKEN},
};

/// Builder for creating a new [`GrafanaClient`].
///
/// All options have defaults except `base_url` and `token`, which are
/// required.
///
/// # Example
///
/// ```rust,ignore
/// use grafana_client::GrafanaClient;
///
/// let client = GrafanaClient::builder()
///     .base_url("https://grafana.example.com".to_string())
///     .token("glsa_xxx".to_string())
///     .org_id("2".to_string())
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// ```
pub struct GrafanaClientBuilder {
    base_url: Option<String>,
    token: Option<SecretString>,
    org_id: String,
    verify_ssl: bool,
    timeout: Duration,
}

impl Default for GrafanaClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            token: None,
            org_id: DEFAULT_ORG_ID.to_string(),
            verify_ssl: true,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl GrafanaClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the Grafana instance, e.g. `https://grafana.example.com`.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the bearer token (a service account token or API key).
    pub fn token(mut self, token: String) -> Self {
        self.token = Some(SecretString::new(token.into()));
        self
    }

    /// Set the organization id. Default is `"1"`.
    pub fn org_id(mut self, org_id: String) -> Self {
        self.org_id = org_id;
        self
    }

    /// Set whether to verify TLS certificates. Default is `true`.
    ///
    /// # Security Warning
    /// Only disable verification in development or testing environments.
    ///
    /// # Note
    /// This only affects HTTPS connections. For HTTP URLs, a warning is logged
    /// but no error occurs.
    pub fn verify_ssl(mut self, verify: bool) -> Self {
        self.verify_ssl = verify;
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create a client builder from configuration.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use grafana_client::GrafanaClient;
    /// use grafana_config::ConfigLoader;
    ///
    /// let config = ConfigLoader::new().from_env()?.build()?;
    /// let client = GrafanaClient::builder().from_config(&config).build()?;
    /// ```
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.token = Some(config.auth.token.clone());
        self.org_id = config.connection.org_id.clone();
        self.verify_ssl = config.connection.verify_ssl;
        self.timeout = config.connection.timeout;
        self
    }

    /// Normalize a base URL by trimming whitespace and trailing slashes.
    ///
    /// - `"https://grafana.example.com/"` -> `"https://grafana.example.com"`
    /// - `"https://example.com/grafana//"` -> `"https://example.com/grafana"`
    fn normalize_base_url(url: &str) -> String {
        url.trim().trim_end_matches('/').to_string()
    }

    fn default_headers(token: &SecretString) -> Result<HeaderMap> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
            .map_err(|_| ConfigError::InvalidValue {
                var: ENV_TOKEN.to_string(),
                message: "contains characters that are not allowed in an HTTP header".to_string(),
            })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    /// Build the [`GrafanaClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if `base_url` or `token` is missing or blank.
    /// Returns [`ClientError::Http`] if the HTTP client fails to build.
    pub fn build(self) -> Result<GrafanaClient> {
        let base_url = self
            .base_url
            .as_deref()
            .map(Self::normalize_base_url)
            .filter(|url| !url.is_empty())
            .ok_or(ClientError::Config(ConfigError::MissingBaseUrl))?;

        let token = self
            .token
            .filter(|t| !t.expose_secret().trim().is_empty())
            .ok_or(ClientError::Config(ConfigError::MissingToken))?;

        let mut http_builder = reqwest::Client::builder()
            .default_headers(Self::default_headers(&token)?)
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if !self.verify_ssl {
            if base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "verify_ssl=false has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(GrafanaClient {
            http,
            base_url,
            org_id: self.org_id,
            verify_ssl: self.verify_ssl,
            timeout: self.timeout,
        })
    }
}
