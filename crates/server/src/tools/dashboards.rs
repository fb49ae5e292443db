//! Dashboard tools: `get_dashboard`, `list_dashboards` and `get_dashboard_variables`.

use grafana_client::{DashboardMeta, DashboardSearch, Refresh, SearchHit, TemplateVariable};
use grafana_config::constants::{DEFAULT_SEARCH_LIMIT, MAX_VARIABLE_OPTIONS};
use serde::Serialize;
use serde_json::{Map, Value};

use super::ToolArgs;
use super::args::parse_id_list;
use super::panels::{FlatPanel, flatten_panels};
use crate::dispatch::GrafanaApi;
use crate::error::ToolError;

#[derive(Debug, Serialize)]
struct DashboardSummary {
    uid: Option<String>,
    title: Option<String>,
    tags: Vec<String>,
    timezone: Option<String>,
    refresh: Option<Refresh>,
    version: Option<i64>,
    editable: Option<bool>,
    meta: MetaSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    panels: Option<Vec<FlatPanel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    panel_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    time_settings: Option<Map<String, Value>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MetaSummary {
    can_save: Option<bool>,
    can_edit: Option<bool>,
    can_admin: Option<bool>,
    created: Option<String>,
    updated: Option<String>,
    url: Option<String>,
    folder_id: Option<i64>,
    folder_title: Option<String>,
}

impl From<DashboardMeta> for MetaSummary {
    fn from(meta: DashboardMeta) -> Self {
        Self {
            can_save: meta.can_save,
            can_edit: meta.can_edit,
            can_admin: meta.can_admin,
            created: meta.created,
            updated: meta.updated,
            url: meta.url,
            folder_id: meta.folder_id,
            folder_title: meta.folder_title,
        }
    }
}

pub(crate) async fn get_dashboard<C: GrafanaApi>(
    client: &C,
    args: &ToolArgs,
) -> Result<Value, ToolError> {
    let uid = args.required_str("dashboard_uid")?;
    let include_panels = args.bool_or("include_panels", true)?;

    let envelope = client.get_dashboard(uid).await?;
    let dashboard = envelope.dashboard;

    let panels = include_panels.then(|| flatten_panels(&dashboard.panels));
    let variables = dashboard.templating.list.len();

    let summary = DashboardSummary {
        uid: dashboard.uid,
        title: dashboard.title,
        tags: dashboard.tags,
        timezone: dashboard.timezone,
        refresh: dashboard.refresh,
        version: dashboard.version,
        editable: dashboard.editable,
        meta: envelope.meta.into(),
        panel_count: panels.as_ref().map(Vec::len),
        panels,
        variables_count: (variables > 0).then_some(variables),
        time_settings: (!dashboard.time.is_empty()).then_some(dashboard.time),
    };
    Ok(serde_json::to_value(summary)?)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DashboardListing {
    uid: Option<String>,
    title: Option<String>,
    url: Option<String>,
    tags: Vec<String>,
    folder_title: Option<String>,
    is_starred: bool,
}

impl From<SearchHit> for DashboardListing {
    fn from(hit: SearchHit) -> Self {
        Self {
            uid: hit.uid,
            title: hit.title,
            url: hit.url,
            tags: hit.tags,
            folder_title: hit.folder_title,
            is_starred: hit.is_starred,
        }
    }
}

#[derive(Debug, Serialize)]
struct DashboardList {
    total: usize,
    dashboards: Vec<DashboardListing>,
}

pub(crate) async fn list_dashboards<C: GrafanaApi>(
    client: &C,
    args: &ToolArgs,
) -> Result<Value, ToolError> {
    let folder_ids = match args.optional_str("folder_ids")? {
        Some(raw) => parse_id_list("folder_ids", raw)?,
        None => Vec::new(),
    };
    let search = DashboardSearch {
        query: args.optional_str("query")?.map(str::to_string),
        tag: args.optional_str("tag")?.map(str::to_string),
        folder_ids,
        starred: args.bool_or("starred", false)?,
        limit: args.u64_or("limit", DEFAULT_SEARCH_LIMIT)?,
        ..DashboardSearch::default()
    };

    let dashboards: Vec<DashboardListing> = client
        .search_dashboards(&search)
        .await?
        .into_iter()
        .map(DashboardListing::from)
        .collect();

    Ok(serde_json::to_value(DashboardList {
        total: dashboards.len(),
        dashboards,
    })?)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VariableRecord {
    name: Option<String>,
    #[serde(rename = "type")]
    variable_type: Option<String>,
    label: Option<String>,
    description: Option<String>,
    query: Option<Value>,
    datasource: Option<Value>,
    current: Option<Value>,
    multi: bool,
    include_all: bool,
    options: Vec<Value>,
    hide: i64,
}

impl From<TemplateVariable> for VariableRecord {
    fn from(variable: TemplateVariable) -> Self {
        let mut options = variable.options;
        options.truncate(MAX_VARIABLE_OPTIONS);
        Self {
            name: variable.name,
            variable_type: variable.variable_type,
            label: variable.label,
            description: variable.description,
            query: variable.query,
            datasource: variable.datasource,
            current: variable.current,
            multi: variable.multi,
            include_all: variable.include_all,
            options,
            hide: variable.hide,
        }
    }
}

#[derive(Debug, Serialize)]
struct DashboardVariables {
    dashboard_uid: String,
    dashboard_title: Option<String>,
    variables_count: usize,
    variables: Vec<VariableRecord>,
}

pub(crate) async fn get_dashboard_variables<C: GrafanaApi>(
    client: &C,
    args: &ToolArgs,
) -> Result<Value, ToolError> {
    let uid = args.required_str("dashboard_uid")?;
    let dashboard = client.get_dashboard(uid).await?.dashboard;

    let variables: Vec<VariableRecord> = dashboard
        .templating
        .list
        .into_iter()
        .map(VariableRecord::from)
        .collect();

    Ok(serde_json::to_value(DashboardVariables {
        dashboard_uid: uid.to_string(),
        dashboard_title: dashboard.title,
        variables_count: variables.len(),
        variables,
    })?)
}
