//! Dashboard search endpoints.
//!
//! Both functions hit `/api/search` restricted to `type=dash-db`. Optional
//! filters are only sent when set; id lists are comma-joined.

use reqwest::Client;

use crate::endpoints::send_request;
use crate::error::Result;
use crate::models::{DashboardSearch, PagedSearch, SearchHit, SearchPage};

const SEARCH_ENDPOINT: &str = "/api/search";

/// Search dashboards.
pub async fn search_dashboards(
    client: &Client,
    base_url: &str,
    search: &DashboardSearch,
) -> Result<Vec<SearchHit>> {
    let mut query_params: Vec<(&str, String)> = vec![
        ("type", "dash-db".to_string()),
        ("limit", search.limit.to_string()),
    ];

    push_text_filters(&mut query_params, search.query.as_deref(), search.tag.as_deref());

    if !search.folder_ids.is_empty() {
        query_params.push(("folderIds", join_ids(&search.folder_ids)));
    }
    if !search.dashboard_ids.is_empty() {
        query_params.push(("dashboardIds", join_ids(&search.dashboard_ids)));
    }
    if search.starred {
        query_params.push(("starred", "true".to_string()));
    }

    let builder = client
        .get(format!("{}{}", base_url, SEARCH_ENDPOINT))
        .query(&query_params);

    send_request(builder, SEARCH_ENDPOINT, "GET").await
}

/// Search dashboards one page at a time.
///
/// Page 0 is treated as page 1. The returned `total` is the number of hits
/// on this page.
pub async fn search_with_pagination(
    client: &Client,
    base_url: &str,
    search: &PagedSearch,
) -> Result<SearchPage> {
    let page = search.page.max(1);

    let mut query_params: Vec<(&str, String)> = vec![
        ("type", "dash-db".to_string()),
        ("page", page.to_string()),
        ("limit", search.limit.to_string()),
    ];

    push_text_filters(&mut query_params, search.query.as_deref(), search.tag.as_deref());

    let builder = client
        .get(format!("{}{}", base_url, SEARCH_ENDPOINT))
        .query(&query_params);

    let dashboards: Vec<SearchHit> = send_request(builder, SEARCH_ENDPOINT, "GET").await?;
    let total = dashboards.len();

    Ok(SearchPage {
        dashboards,
        page,
        limit: search.limit,
        total,
    })
}

fn push_text_filters(
    query_params: &mut Vec<(&str, String)>,
    query: Option<&str>,
    tag: Option<&str>,
) {
    if let Some(q) = query.filter(|q| !q.is_empty()) {
        query_params.push(("query", q.to_string()));
    }
    if let Some(t) = tag.filter(|t| !t.is_empty()) {
        query_params.push(("tag", t.to_string()));
    }
}

fn join_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
