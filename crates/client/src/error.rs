//! Error types for the Grafana client.

use std::time::Duration;

use grafana_config::ConfigError;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Grafana client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The client could not be constructed from the supplied settings.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Network or transport failure.
    #[error("Grafana API request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Request timed out.
    #[error("Grafana API request failed: timed out after {0:?}")]
    Timeout(Duration),

    /// Non-2xx response from Grafana.
    #[error(
        "Grafana API request failed: HTTP {status} at {url}{}",
        .detail.as_ref().map(|d| format!(" - {d}")).unwrap_or_default()
    )]
    Api {
        status: u16,
        url: String,
        detail: Option<String>,
    },

    /// A 2xx body that does not match the expected model.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// Check if this error stems from misconfiguration rather than a request.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if Grafana answered 404 Not Found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }
}
