//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test builder methods for configuration loading.
//! - Test environment variable handling and precedence.
//! - Test dotenv gating and validation failures.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every variable the loader reads, unset, for use with `temp_env::with_vars`.
pub fn cleared_grafana_env() -> Vec<(&'static str, Option<&'static str>)> {
    vec![
        ("GRAFANA_URL", None),
        ("GRAFANA_TOKEN", None),
        ("GRAFANA_ORG_ID", None),
        ("GRAFANA_VERIFY_SSL", None),
        ("GRAFANA_TIMEOUT", None),
    ]
}

/// `cleared_grafana_env()` with the given variables set.
pub fn grafana_env(
    vars: &[(&'static str, &'static str)],
) -> Vec<(&'static str, Option<&'static str>)> {
    let mut env = cleared_grafana_env();
    for (key, value) in vars {
        env.retain(|(k, _)| k != key);
        env.push((key, Some(value)));
    }
    env
}
