//! Dashboard endpoint tests.
//!
//! This module tests the Grafana dashboard API:
//! - Fetching a dashboard by uid, including nested row panels
//! - Fetching the home dashboard
//! - Listing dashboard tags
//!
//! # Invariants
//! - Uids are percent-encoded into a single path segment
//! - Rows decode as `Panel::Row`, everything else as `Panel::Visualization`

mod common;

use common::*;
use grafana_client::{Panel, Refresh};
use wiremock::matchers::{method, path};

#[tokio::test]
async fn test_get_dashboard() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("dashboards/sample_dashboard.json");

    Mock::given(method("GET"))
        .and(path("/api/dashboards/uid/svc-overview"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let result = endpoints::get_dashboard(&client, &mock_server.uri(), "svc-overview").await;

    assert!(result.is_ok());
    let envelope = result.unwrap();
    let dashboard = envelope.dashboard;
    assert_eq!(dashboard.uid.as_deref(), Some("svc-overview"));
    assert_eq!(dashboard.title.as_deref(), Some("Service Overview"));
    assert_eq!(dashboard.tags, vec!["production", "api"]);
    assert_eq!(dashboard.refresh, Some(Refresh::Interval("30s".to_string())));
    assert_eq!(dashboard.version, Some(12));
    assert_eq!(dashboard.panels.len(), 2);
    assert_eq!(dashboard.templating.list.len(), 1);
    assert_eq!(dashboard.templating.list[0].options.len(), 12);
    assert_eq!(envelope.meta.folder_title.as_deref(), Some("API Team"));
    assert_eq!(envelope.meta.can_admin, Some(false));
}

#[tokio::test]
async fn test_get_dashboard_with_rows() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("dashboards/rows_dashboard.json");

    Mock::given(method("GET"))
        .and(path("/api/dashboards/uid/db-health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let envelope = endpoints::get_dashboard(&client, &mock_server.uri(), "db-health")
        .await
        .unwrap();

    let panels = &envelope.dashboard.panels;
    assert_eq!(panels.len(), 4);
    assert!(matches!(panels[0], Panel::Visualization(_)));
    match &panels[1] {
        Panel::Row(row) => {
            assert_eq!(row.id, Some(2));
            assert!(!row.collapsed);
            assert!(row.panels.is_none());
        }
        other => panic!("expected row, got {other:?}"),
    }
    match &panels[3] {
        Panel::Row(row) => {
            assert!(row.collapsed);
            assert!(row.title.is_none());
            let nested: Vec<_> = row.panels.as_ref().unwrap().iter().map(|p| p.id).collect();
            assert_eq!(nested, vec![Some(5), Some(6)]);
        }
        other => panic!("expected row, got {other:?}"),
    }
    assert_eq!(envelope.dashboard.refresh, Some(Refresh::Flag(false)));
    assert!(envelope.dashboard.time.is_empty());
}

#[tokio::test]
async fn test_get_dashboard_encodes_uid() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/dashboards/uid/team%2Fops"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("dashboards/sample_dashboard.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let result = endpoints::get_dashboard(&client, &mock_server.uri(), "team/ops").await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_get_dashboard_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/dashboards/uid/missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "message": "Dashboard not found"
            })),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let err = endpoints::get_dashboard(&client, &mock_server.uri(), "missing")
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    match &err {
        ClientError::Api { status, url, detail } => {
            assert_eq!(*status, 404);
            assert!(url.ends_with("/api/dashboards/uid/missing"));
            assert_eq!(detail.as_deref(), Some(r#"{"message":"Dashboard not found"}"#));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    let message = err.to_string();
    assert!(message.starts_with("Grafana API request failed"));
    assert!(message.contains("Dashboard not found"));
}

#[tokio::test]
async fn test_get_home_dashboard() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/dashboards/home"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("dashboards/sample_dashboard.json")),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let envelope = endpoints::get_home_dashboard(&client, &mock_server.uri())
        .await
        .unwrap();

    assert_eq!(envelope.dashboard.uid.as_deref(), Some("svc-overview"));
}

#[tokio::test]
async fn test_get_dashboard_tags() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/dashboards/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("dashboards/tags.json")))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let tags = endpoints::get_dashboard_tags(&client, &mock_server.uri())
        .await
        .unwrap();

    assert_eq!(tags.len(), 3);
    assert_eq!(tags[0].term, "production");
    assert_eq!(tags[0].count, 14);
}
