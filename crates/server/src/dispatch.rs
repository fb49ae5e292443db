//! Tool dispatch.
//!
//! Responsibilities:
//! - Define [`GrafanaApi`], the reads the tools need from Grafana.
//! - Route a tool name and its arguments to the matching tool.
//! - Flatten every failure into the `{"error", "tool"}` payload.
//!
//! Does NOT handle:
//! - The JSON-RPC envelope (see the `protocol` module).
//! - Reshaping responses (see the `tools` module).
//!
//! Invariants:
//! - [`Dispatcher::call`] always returns a pretty-printed JSON document; tool
//!   failures never surface as protocol errors.

use grafana_client::{
    DashboardEnvelope, DashboardSearch, DashboardTag, DataSource, GrafanaClient, HealthStatus,
    Result, SearchHit,
};
use serde_json::{Value, json};

use crate::error::ToolError;
use crate::tools::{self, Tool, ToolArgs};

/// Grafana reads used by the tools and the startup probe.
pub(crate) trait GrafanaApi {
    async fn get_dashboard(&self, uid: &str) -> Result<DashboardEnvelope>;
    async fn search_dashboards(&self, search: &DashboardSearch) -> Result<Vec<SearchHit>>;
    async fn list_folders(&self, limit: u64) -> Result<Vec<SearchHit>>;
    async fn get_dashboard_tags(&self) -> Result<Vec<DashboardTag>>;
    async fn get_datasources(&self) -> Result<Vec<DataSource>>;
    async fn get_datasource(&self, uid: &str) -> Result<DataSource>;
    async fn health(&self) -> Result<HealthStatus>;
}

impl GrafanaApi for GrafanaClient {
    async fn get_dashboard(&self, uid: &str) -> Result<DashboardEnvelope> {
        GrafanaClient::get_dashboard(self, uid).await
    }

    async fn search_dashboards(&self, search: &DashboardSearch) -> Result<Vec<SearchHit>> {
        GrafanaClient::search_dashboards(self, search).await
    }

    async fn list_folders(&self, limit: u64) -> Result<Vec<SearchHit>> {
        GrafanaClient::list_folders(self, limit).await
    }

    async fn get_dashboard_tags(&self) -> Result<Vec<DashboardTag>> {
        GrafanaClient::get_dashboard_tags(self).await
    }

    async fn get_datasources(&self) -> Result<Vec<DataSource>> {
        GrafanaClient::get_datasources(self).await
    }

    async fn get_datasource(&self, uid: &str) -> Result<DataSource> {
        GrafanaClient::get_datasource(self, uid).await
    }

    async fn health(&self) -> Result<HealthStatus> {
        GrafanaClient::health(self).await
    }
}

/// Runs tools against one Grafana client for the life of the process.
#[derive(Debug)]
pub(crate) struct Dispatcher<C> {
    client: C,
}

impl<C: GrafanaApi> Dispatcher<C> {
    pub(crate) fn new(client: C) -> Self {
        Self { client }
    }

    /// Run tool `name` and return its JSON payload.
    ///
    /// `arguments` may be `null` for tools without required arguments.
    pub(crate) async fn call(&self, name: &str, arguments: Value) -> String {
        let payload = match self.execute(name, arguments).await {
            Ok(value) => value,
            Err(err) => {
                tracing::error!(tool = name, error = %err, "Tool call failed");
                json!({ "error": err.to_string(), "tool": name })
            }
        };
        serde_json::to_string_pretty(&payload).unwrap_or_else(|_| payload.to_string())
    }

    async fn execute(&self, name: &str, arguments: Value) -> std::result::Result<Value, ToolError> {
        let tool = Tool::from_name(name).ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        let args = ToolArgs::from_value(arguments)?;
        tracing::debug!(tool = name, "Running tool");

        let client = &self.client;
        match tool {
            Tool::GetDashboard => tools::dashboards::get_dashboard(client, &args).await,
            Tool::GetPanel => tools::panels::get_panel(client, &args).await,
            Tool::ListDashboards => tools::dashboards::list_dashboards(client, &args).await,
            Tool::GetDashboardVariables => {
                tools::dashboards::get_dashboard_variables(client, &args).await
            }
            Tool::ListFolders => tools::folders::list_folders(client, &args).await,
            Tool::SearchByTag => tools::tags::search_by_tag(client, &args).await,
            Tool::GetDashboardTags => tools::tags::get_dashboard_tags(client).await,
            Tool::GetDatasources => tools::datasources::get_datasources(client).await,
            Tool::GetDatasource => tools::datasources::get_datasource(client, &args).await,
        }
    }
}
