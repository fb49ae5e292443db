//! Tag tools: `search_by_tag` and `get_dashboard_tags`.

use std::collections::HashSet;

use futures::future::try_join_all;
use grafana_client::{DashboardSearch, DashboardTag, SearchHit};
use serde::Serialize;
use serde_json::Value;

use super::ToolArgs;
use crate::dispatch::GrafanaApi;
use crate::error::ToolError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TaggedDashboard {
    uid: String,
    title: Option<String>,
    url: Option<String>,
    tags: Vec<String>,
    folder_title: Option<String>,
}

#[derive(Debug, Serialize)]
struct TagSearch<'a> {
    search_tags: Vec<&'a str>,
    total: usize,
    dashboards: Vec<TaggedDashboard>,
}

/// Keep the first hit for each uid, in order. Hits without a uid are dropped.
fn unique_by_uid(hits: impl IntoIterator<Item = SearchHit>) -> Vec<TaggedDashboard> {
    let mut seen = HashSet::new();
    hits.into_iter()
        .filter_map(|hit| {
            let uid = hit.uid?;
            seen.insert(uid.clone()).then(|| TaggedDashboard {
                uid,
                title: hit.title,
                url: hit.url,
                tags: hit.tags,
                folder_title: hit.folder_title,
            })
        })
        .collect()
}

pub(crate) async fn search_by_tag<C: GrafanaApi>(
    client: &C,
    args: &ToolArgs,
) -> Result<Value, ToolError> {
    let tags: Vec<&str> = args
        .required_str("tags")?
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .collect();
    if tags.is_empty() {
        return Err(ToolError::invalid("tags", "expected at least one tag"));
    }

    let searches: Vec<DashboardSearch> = tags
        .iter()
        .map(|tag| DashboardSearch::by_tag(*tag))
        .collect();
    // Pages come back in tag order, so earlier tags still win.
    let pages = try_join_all(searches.iter().map(|search| client.search_dashboards(search))).await?;
    let dashboards = unique_by_uid(pages.into_iter().flatten());

    Ok(serde_json::to_value(TagSearch {
        search_tags: tags,
        total: dashboards.len(),
        dashboards,
    })?)
}

#[derive(Debug, Serialize)]
struct TagList {
    total: usize,
    tags: Vec<DashboardTag>,
}

pub(crate) async fn get_dashboard_tags<C: GrafanaApi>(client: &C) -> Result<Value, ToolError> {
    let tags = client.get_dashboard_tags().await?;
    Ok(serde_json::to_value(TagList {
        total: tags.len(),
        tags,
    })?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeGrafana;
    use serde_json::json;

    fn hit(uid: Option<&str>, title: &str) -> SearchHit {
        SearchHit {
            uid: uid.map(str::to_string),
            title: Some(title.to_string()),
            ..SearchHit::default()
        }
    }

    fn tags(raw: &str) -> ToolArgs {
        ToolArgs::from_value(json!({ "tags": raw })).unwrap()
    }

    #[test]
    fn test_unique_by_uid_first_seen_wins() {
        let unique = unique_by_uid(vec![
            hit(Some("x"), "first"),
            hit(None, "no uid"),
            hit(Some("y"), "other"),
            hit(Some("x"), "second"),
        ]);

        let titles: Vec<_> = unique.iter().map(|d| d.title.as_deref().unwrap()).collect();
        assert_eq!(titles, vec!["first", "other"]);
    }

    #[tokio::test]
    async fn test_search_by_tag_merges_overlapping_results() {
        let client = FakeGrafana::with_fixtures()
            .with_tag_hits("a", vec![hit(Some("x"), "X from a")])
            .with_tag_hits("b", vec![hit(Some("x"), "X from b"), hit(Some("z"), "Z")]);

        let value = search_by_tag(&client, &tags("a,a,b")).await.unwrap();

        assert_eq!(value["search_tags"], json!(["a", "a", "b"]));
        assert_eq!(value["total"], 2);
        assert_eq!(value["dashboards"][0]["uid"], "x");
        assert_eq!(value["dashboards"][0]["title"], "X from a");
        assert_eq!(value["dashboards"][1]["uid"], "z");

        let searched: Vec<_> = client
            .searches()
            .into_iter()
            .map(|search| search.tag.unwrap())
            .collect();
        assert_eq!(searched.len(), 3);
        assert!(client.searches().iter().all(|search| search.limit == 100));
    }

    #[tokio::test]
    async fn test_search_by_tag_trims_and_drops_empty_segments() {
        let client = FakeGrafana::with_fixtures();
        let value = search_by_tag(&client, &tags(" production , ,api ")).await.unwrap();

        assert_eq!(value["search_tags"], json!(["production", "api"]));
        let uids: Vec<_> = value["dashboards"]
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["uid"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(uids, vec!["svc-overview", "k8s-nodes"]);
        assert_eq!(
            value["dashboards"][0].as_object().unwrap().keys().collect::<Vec<_>>(),
            vec!["uid", "title", "url", "tags", "folderTitle"]
        );
    }

    #[tokio::test]
    async fn test_search_by_tag_requires_a_tag() {
        let client = FakeGrafana::with_fixtures();
        assert!(matches!(
            search_by_tag(&client, &tags(" , ")).await,
            Err(ToolError::InvalidArgument { .. })
        ));
        assert!(matches!(
            search_by_tag(&client, &ToolArgs::default()).await,
            Err(ToolError::MissingArgument(_))
        ));
        assert!(client.searches().is_empty());
    }

    #[tokio::test]
    async fn test_search_by_tag_fails_when_any_search_fails() {
        let client = FakeGrafana::with_fixtures().with_failing_tag("broken");
        let err = search_by_tag(&client, &tags("production,broken"))
            .await
            .unwrap_err();

        assert!(matches!(err, ToolError::Client(_)));
    }

    #[tokio::test]
    async fn test_get_dashboard_tags() {
        let client = FakeGrafana::with_fixtures();
        let value = get_dashboard_tags(&client).await.unwrap();

        assert_eq!(value["total"], 3);
        assert_eq!(value["tags"][1], json!({"term": "api", "count": 6}));
    }
}
