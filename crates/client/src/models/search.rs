//! Search models for `/api/search`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::serde_helpers::null_as_default;
use grafana_config::constants::{DEFAULT_SEARCH_LIMIT, DEFAULT_SEARCH_PAGE};

/// One search result: a dashboard or a folder, depending on the query type.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub hit_type: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_starred: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_uid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_url: Option<String>,
    /// Fields this model does not name (`slug`, `sortMeta`, ...), kept as sent.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Filters for a dashboard search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSearch {
    /// Free-text title filter.
    pub query: Option<String>,
    pub tag: Option<String>,
    pub folder_ids: Vec<i64>,
    pub dashboard_ids: Vec<i64>,
    /// Only starred dashboards.
    pub starred: bool,
    pub limit: u64,
}

impl Default for DashboardSearch {
    fn default() -> Self {
        Self {
            query: None,
            tag: None,
            folder_ids: Vec::new(),
            dashboard_ids: Vec::new(),
            starred: false,
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

impl DashboardSearch {
    /// Search for dashboards carrying `tag`.
    pub fn by_tag(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            ..Self::default()
        }
    }
}

/// Filters for a paginated dashboard search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagedSearch {
    pub query: Option<String>,
    pub tag: Option<String>,
    /// 1-indexed page number.
    pub page: u64,
    pub limit: u64,
}

impl Default for PagedSearch {
    fn default() -> Self {
        Self {
            query: None,
            tag: None,
            page: DEFAULT_SEARCH_PAGE,
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

/// One page of dashboard search results.
///
/// `total` counts the hits on this page only; Grafana's search API does not
/// report a total across pages.
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct SearchPage {
    pub dashboards: Vec<SearchHit>,
    pub page: u64,
    pub limit: u64,
    pub total: usize,
}
