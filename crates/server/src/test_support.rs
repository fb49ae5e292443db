//! In-memory [`GrafanaApi`] for tool and protocol tests.

use std::collections::HashMap;
use std::sync::Mutex;

use grafana_client::testing::load_model;
use grafana_client::{
    ClientError, DashboardEnvelope, DashboardSearch, DashboardTag, DataSource, HealthStatus,
    Result, SearchHit,
};

use crate::dispatch::GrafanaApi;

#[derive(Debug, Default)]
pub(crate) struct FakeGrafana {
    dashboards: HashMap<String, DashboardEnvelope>,
    hits: Vec<SearchHit>,
    tag_hits: HashMap<String, Vec<SearchHit>>,
    failing_tags: Vec<String>,
    folders: Vec<SearchHit>,
    tags: Vec<DashboardTag>,
    datasources: Vec<DataSource>,
    health: Option<HealthStatus>,
    searches: Mutex<Vec<DashboardSearch>>,
    folder_limits: Mutex<Vec<u64>>,
}

impl FakeGrafana {
    /// A Grafana serving the client crate's JSON fixtures.
    pub(crate) fn with_fixtures() -> Self {
        let mut dashboards = HashMap::new();
        for path in [
            "dashboards/sample_dashboard.json",
            "dashboards/rows_dashboard.json",
        ] {
            let envelope: DashboardEnvelope = load_model(path);
            let uid = envelope.dashboard.uid.clone().unwrap_or_default();
            dashboards.insert(uid, envelope);
        }

        let mut datasources: Vec<DataSource> = load_model("datasources/list_datasources.json");
        datasources.push(load_model("datasources/get_datasource.json"));

        Self {
            dashboards,
            hits: load_model("search/dashboards.json"),
            folders: load_model("search/folders.json"),
            tags: load_model("dashboards/tags.json"),
            datasources,
            health: Some(load_model("server/health.json")),
            ..Self::default()
        }
    }

    /// Serve `hits` for searches by `tag` instead of filtering the fixtures.
    pub(crate) fn with_tag_hits(mut self, tag: &str, hits: Vec<SearchHit>) -> Self {
        self.tag_hits.insert(tag.to_string(), hits);
        self
    }

    /// Answer searches by `tag` with a server error.
    pub(crate) fn with_failing_tag(mut self, tag: &str) -> Self {
        self.failing_tags.push(tag.to_string());
        self
    }

    /// Answer health checks with a server error.
    pub(crate) fn unhealthy(mut self) -> Self {
        self.health = None;
        self
    }

    /// Every search received, in order.
    pub(crate) fn searches(&self) -> Vec<DashboardSearch> {
        self.searches.lock().unwrap().clone()
    }

    pub(crate) fn folder_limits(&self) -> Vec<u64> {
        self.folder_limits.lock().unwrap().clone()
    }
}

fn not_found(path: String, what: &str) -> ClientError {
    ClientError::Api {
        status: 404,
        url: format!("http://grafana.test{path}"),
        detail: Some(format!(r#"{{"message":"{what} not found"}}"#)),
    }
}

fn server_error(path: &str) -> ClientError {
    ClientError::Api {
        status: 500,
        url: format!("http://grafana.test{path}"),
        detail: None,
    }
}

impl GrafanaApi for FakeGrafana {
    async fn get_dashboard(&self, uid: &str) -> Result<DashboardEnvelope> {
        self.dashboards
            .get(uid)
            .cloned()
            .ok_or_else(|| not_found(format!("/api/dashboards/uid/{uid}"), "Dashboard"))
    }

    async fn search_dashboards(&self, search: &DashboardSearch) -> Result<Vec<SearchHit>> {
        self.searches.lock().unwrap().push(search.clone());

        let Some(tag) = search.tag.as_deref() else {
            return Ok(self.hits.clone());
        };
        if self.failing_tags.iter().any(|failing| failing == tag) {
            return Err(server_error("/api/search"));
        }
        if let Some(hits) = self.tag_hits.get(tag) {
            return Ok(hits.clone());
        }
        Ok(self
            .hits
            .iter()
            .filter(|hit| hit.tags.iter().any(|t| t == tag))
            .cloned()
            .collect())
    }

    async fn list_folders(&self, limit: u64) -> Result<Vec<SearchHit>> {
        self.folder_limits.lock().unwrap().push(limit);
        Ok(self.folders.iter().take(limit as usize).cloned().collect())
    }

    async fn get_dashboard_tags(&self) -> Result<Vec<DashboardTag>> {
        Ok(self.tags.clone())
    }

    async fn get_datasources(&self) -> Result<Vec<DataSource>> {
        Ok(self.datasources.clone())
    }

    async fn get_datasource(&self, uid: &str) -> Result<DataSource> {
        self.datasources
            .iter()
            .find(|ds| ds.uid.as_deref() == Some(uid))
            .cloned()
            .ok_or_else(|| not_found(format!("/api/datasources/uid/{uid}"), "Data source"))
    }

    async fn health(&self) -> Result<HealthStatus> {
        self.health.clone().ok_or_else(|| server_error("/api/health"))
    }
}
