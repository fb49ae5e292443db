//! Authentication settings.
//!
//! Invariants:
//! - The bearer credential is held as a `secrecy::SecretString` so it is
//!   redacted from `Debug` output and log lines.

use secrecy::SecretString;

/// Static bearer credential presented on every request.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// API or service-account token.
    pub token: SecretString,
}

impl AuthConfig {
    pub fn new(token: SecretString) -> Self {
        Self { token }
    }
}
