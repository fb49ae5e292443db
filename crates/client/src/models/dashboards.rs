//! Dashboard models for the Grafana dashboard API.
//!
//! This module contains types for `/api/dashboards/uid/{uid}`,
//! `/api/dashboards/home` and `/api/dashboards/tags`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::panels::Panel;
use crate::serde_helpers::null_as_default;

/// Response of a dashboard fetch: the dashboard model plus its metadata.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct DashboardEnvelope {
    #[serde(default, deserialize_with = "null_as_default")]
    pub dashboard: Dashboard,
    #[serde(default, deserialize_with = "null_as_default")]
    pub meta: DashboardMeta,
}

/// The dashboard JSON model.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub refresh: Option<Refresh>,
    #[serde(default)]
    pub version: Option<i64>,
    #[serde(default)]
    pub editable: Option<bool>,
    /// Top-level panels in layout order. Rows may carry nested panels.
    #[serde(default, deserialize_with = "null_as_default")]
    pub panels: Vec<Panel>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub templating: Templating,
    /// Time range settings (`from`, `to`), kept as authored.
    #[serde(default, deserialize_with = "null_as_default")]
    pub time: Map<String, Value>,
}

/// Auto-refresh setting: an interval such as `"5s"`, or `false` when off.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Refresh {
    Interval(String),
    Flag(bool),
}

/// Dashboard metadata returned next to the model.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMeta {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub can_save: Option<bool>,
    #[serde(default)]
    pub can_edit: Option<bool>,
    #[serde(default)]
    pub can_admin: Option<bool>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_starred: bool,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub updated: Option<String>,
    #[serde(default)]
    pub folder_id: Option<i64>,
    #[serde(default)]
    pub folder_uid: Option<String>,
    #[serde(default)]
    pub folder_title: Option<String>,
}

/// The `templating` section of a dashboard.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Templating {
    #[serde(default, deserialize_with = "null_as_default")]
    pub list: Vec<TemplateVariable>,
}

/// A dashboard template variable.
///
/// `query`, `datasource` and `current` vary by variable type and are kept
/// as raw JSON.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct TemplateVariable {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub variable_type: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub query: Option<Value>,
    #[serde(default)]
    pub datasource: Option<Value>,
    #[serde(default)]
    pub current: Option<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub multi: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub include_all: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub options: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hide: i64,
}

/// A dashboard tag with its usage count.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct DashboardTag {
    #[serde(default)]
    pub term: String,
    #[serde(default)]
    pub count: u64,
}
