//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the Grafana client. All integration tests should use
//! these utilities to ensure consistency.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)
//! - Test-specific assertions or test logic

use std::time::Duration;

// Re-export test utilities from grafana-client
#[allow(unused_imports)]
pub use grafana_client::testing::load_fixture;

// Re-export commonly used types for test convenience
// These are used via `use common::*;` in test files
#[allow(unused_imports)]
pub use grafana_client::{ClientError, GrafanaClient, endpoints};
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Token used by every client built against a mock server.
#[allow(dead_code)]
pub const TEST_TOKEN: &str = "glsa_test_token";

/// Build a [`GrafanaClient`] pointed at a mock server.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> GrafanaClient {
    GrafanaClient::builder()
        .base_url(server.uri())
        .token(TEST_TOKEN.to_string())
        .build()
        .expect("client should build against mock server")
}

/// Build a [`GrafanaClient`] with a custom timeout pointed at a mock server.
#[allow(dead_code)]
pub fn client_with_timeout(server: &MockServer, timeout: Duration) -> GrafanaClient {
    GrafanaClient::builder()
        .base_url(server.uri())
        .token(TEST_TOKEN.to_string())
        .timeout(timeout)
        .build()
        .expect("client should build against mock server")
}
