//! Main Grafana API client and API methods.
//!
//! This module provides the primary [`GrafanaClient`] for reading from the
//! Grafana HTTP API.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `dashboards`: Dashboard, home dashboard and tag methods
//! - `search`: Dashboard search methods
//! - `folders`: Folder methods
//! - `datasources`: Data source methods
//! - `server`: Health and organization methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Settings resolution from the environment (delegated to [`grafana_config`])
//!
//! # Invariants
//! - The client is immutable after construction; every call builds its own request.
//! - All API methods go through the `api_call!` macro, which reports a
//!   transport timeout as [`ClientError::Timeout`] with the configured duration.

pub mod builder;

/// Macro to run an endpoint call and classify its transport failures.
///
/// A `reqwest` timeout becomes [`ClientError::Timeout`] carrying the
/// client's configured timeout; every other result passes through.
///
/// # Usage
///
/// ```ignore
/// api_call!(self, endpoints::some_endpoint(&self.http, &self.base_url, arg1).await)
/// ```
#[macro_export]
#[doc(hidden)]
macro_rules! api_call {
    ($self:expr, $call:expr) => {{
        match $call {
            Err($crate::error::ClientError::Http(e)) if e.is_timeout() => {
                ::tracing::debug!(timeout = ?$self.timeout, "Grafana API request timed out");
                Err($crate::error::ClientError::Timeout($self.timeout))
            }
            other => other,
        }
    }};
}

// API method submodules
mod dashboards;
mod datasources;
mod folders;
mod search;
mod server;

use std::time::Duration;

use grafana_config::ConfigLoader;

use crate::error::{ClientError, Result};

/// Grafana HTTP API client.
///
/// Holds the base URL, organization id and TLS flag; the bearer token lives
/// only inside the HTTP client's default headers.
///
/// # Creating a Client
///
/// Use [`GrafanaClient::builder()`] to create a new client:
///
/// ```rust,ignore
/// use grafana_client::GrafanaClient;
///
/// let client = GrafanaClient::builder()
///     .base_url("https://grafana.example.com".to_string())
///     .token("glsa_xxx".to_string())
///     .build()?;
/// ```
///
/// Or read everything from `GRAFANA_*` environment variables with
/// [`GrafanaClient::from_env()`].
#[derive(Debug, Clone)]
pub struct GrafanaClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) org_id: String,
    pub(crate) verify_ssl: bool,
    pub(crate) timeout: Duration,
}

impl GrafanaClient {
    /// Create a new client builder.
    ///
    /// This is the entry point for constructing a [`GrafanaClient`].
    pub fn builder() -> builder::GrafanaClientBuilder {
        builder::GrafanaClientBuilder::new()
    }

    /// Build a client from `GRAFANA_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if `GRAFANA_URL` or `GRAFANA_TOKEN`
    /// is missing or any value is invalid. No request is made.
    pub fn from_env() -> Result<Self> {
        let config = ConfigLoader::new()
            .from_env()
            .and_then(ConfigLoader::build)
            .map_err(ClientError::from)?;
        Self::builder().from_config(&config).build()
    }

    /// Get the base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the organization id.
    pub fn org_id(&self) -> &str {
        &self.org_id
    }

    /// Whether TLS certificates are verified.
    pub fn verify_ssl(&self) -> bool {
        self.verify_ssl
    }
}
