//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read the `GRAFANA_*` environment variables.
//! - Apply their values to a ConfigLoader instance.
//!
//! Does NOT handle:
//! - Building the final Config (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Only the literal `false` (any case) in GRAFANA_VERIFY_SSL disables verification.

use std::time::Duration;

use secrecy::SecretString;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{ENV_ORG_ID, ENV_TIMEOUT, ENV_TOKEN, ENV_URL, ENV_VERIFY_SSL};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(non_blank)
}

/// Trim `value`, reading a blank string as unset.
pub(super) fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(trimmed.to_string())
    }
}

/// Interpret a GRAFANA_VERIFY_SSL value.
fn parse_verify_flag(value: &str) -> bool {
    !value.eq_ignore_ascii_case("false")
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none(ENV_URL) {
        loader.set_env_base_url(Some(url));
    }
    if let Some(token) = env_var_or_none(ENV_TOKEN) {
        loader.set_env_token(Some(SecretString::new(token.into())));
    }
    if let Some(org_id) = env_var_or_none(ENV_ORG_ID) {
        loader.set_env_org_id(Some(org_id));
    }
    if let Some(verify) = env_var_or_none(ENV_VERIFY_SSL) {
        loader.set_env_verify_ssl(Some(parse_verify_flag(&verify)));
    }
    if let Some(timeout) = env_var_or_none(ENV_TIMEOUT) {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_TIMEOUT.to_string(),
            message: "must be a number of seconds".to_string(),
        })?;
        loader.set_env_timeout(Some(Duration::from_secs(secs)));
    }

    Ok(())
}
