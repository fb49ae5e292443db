//! Shared request execution and response handling.
//!
//! Every endpoint funnels through [`send_request`], which:
//! - Logs method, path and status at debug level.
//! - Converts non-2xx responses into [`ClientError::Api`], keeping the body
//!   (compact JSON when it parses, else raw text) as the error detail.
//! - Returns `T::default()` for `204 No Content` and for empty bodies.
//! - Decodes everything else as JSON into `T`.
//!
//! There is no retry: one failed attempt is terminal for the call.

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Send a request and decode its JSON body into `T`.
///
/// # Arguments
///
/// * `builder` - The prepared request
/// * `endpoint` - Endpoint path, used for logging and error messages
/// * `method` - HTTP method name, used for logging
///
/// # Errors
///
/// - [`ClientError::Http`] on transport failure.
/// - [`ClientError::Api`] on a non-2xx status.
/// - [`ClientError::InvalidResponse`] when a 2xx body does not decode.
pub async fn send_request<T>(builder: RequestBuilder, endpoint: &str, method: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let response = builder.send().await?;
    let status = response.status();

    debug!(
        method,
        endpoint,
        status = status.as_u16(),
        "Grafana API request completed"
    );

    if !status.is_success() {
        let url = response.url().to_string();
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::Api {
            status: status.as_u16(),
            url,
            detail: error_detail(&body),
        });
    }

    if status == StatusCode::NO_CONTENT {
        return Ok(T::default());
    }

    let body = response.bytes().await?;
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice(&body).map_err(|e| {
        ClientError::InvalidResponse(format!("failed to decode response from {endpoint}: {e}"))
    })
}

/// Render an error body for inclusion in [`ClientError::Api`].
fn error_detail(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(value) => Some(value.to_string()),
        Err(_) => Some(trimmed.to_string()),
    }
}
