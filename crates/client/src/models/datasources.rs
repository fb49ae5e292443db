//! Data source models for `/api/datasources`.
//!
//! Invariants:
//! - [`DataSource`] declares no credential fields. Grafana may still send
//!   `password`, `basicAuthPassword`, `basicAuthUser`, `user`,
//!   `secureJsonData` or `secureJsonFields`; serde drops them at decode time,
//!   so they cannot reach any output built from this type.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::serde_helpers::null_as_default;

/// A configured data source.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default)]
    pub org_id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    /// Backend plugin id, e.g. `prometheus`.
    #[serde(rename = "type", default)]
    pub datasource_type: Option<String>,
    #[serde(default)]
    pub access: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_default: bool,
    /// Non-secret plugin settings.
    #[serde(default, deserialize_with = "null_as_default")]
    pub json_data: Map<String, Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub read_only: bool,
    #[serde(default)]
    pub version: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_credential_fields_dropped() {
        let raw = json!({
            "id": 1,
            "uid": "prom-main",
            "name": "Prometheus",
            "type": "prometheus",
            "access": "proxy",
            "url": "http://prometheus:9090",
            "user": "scraper",
            "password": "hunter2",
            "basicAuthUser": "admin",
            "basicAuthPassword": "hunter3",
            "secureJsonData": {"httpHeaderValue1": "Bearer s3cr3t"},
            "secureJsonFields": {"httpHeaderValue1": true},
            "jsonData": {"httpMethod": "POST"}
        });

        let ds: DataSource = serde_json::from_value(raw).unwrap();
        let out = serde_json::to_string(&ds).unwrap();

        for secret in [
            "hunter2",
            "hunter3",
            "s3cr3t",
            "scraper",
            "basicAuth",
            "secureJson",
            "password",
        ] {
            assert!(!out.contains(secret), "leaked {secret}: {out}");
        }
        assert_eq!(ds.json_data.get("httpMethod"), Some(&json!("POST")));
    }
}
