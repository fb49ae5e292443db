//! Shared test utilities for grafana-observer integration tests.
//!
//! Invariants / Assumptions:
//! - Every command is hermetic: no `.env` loading and no `GRAFANA_*` from the host.
//! - `GRAFANA_TOKEN` is set to [`TEST_TOKEN`] unless a test removes it.

#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::{Value, json};

pub const TEST_TOKEN: &str = "glsa_test_token";

/// Returns a hermetic `grafana-observer` command.
pub fn observer_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("grafana-observer");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    cmd.env_remove("GRAFANA_URL")
        .env_remove("GRAFANA_ORG_ID")
        .env_remove("GRAFANA_VERIFY_SSL")
        .env_remove("GRAFANA_TIMEOUT")
        .env_remove("RUST_LOG");

    cmd.env("GRAFANA_TOKEN", TEST_TOKEN);
    cmd
}

/// Returns a hermetic command pointed at `base_url`.
pub fn observer_cmd_with_url(base_url: &str) -> Command {
    let mut cmd = observer_cmd();
    cmd.env("GRAFANA_URL", base_url);
    cmd
}

/// One newline-terminated JSON-RPC request.
pub fn rpc(id: u64, method: &str, params: Value) -> String {
    format!(
        "{}\n",
        json!({"jsonrpc": "2.0", "id": id, "method": method, "params": params})
    )
}

/// Parse every stdout line as a JSON-RPC response.
pub fn responses(stdout: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(|line| serde_json::from_str(line).expect("stdout line is not JSON"))
        .collect()
}

/// Decode the text payload of a `tools/call` response.
pub fn tool_payload(response: &Value) -> Value {
    let text = response["result"]["content"][0]["text"]
        .as_str()
        .expect("tools/call response carries text content");
    serde_json::from_str(text).expect("tool payload is JSON")
}
