//! Data source tools: `get_datasources` and `get_datasource`.
//!
//! [`DataSource`] declares no credential fields, so passwords and
//! `secureJsonData` are dropped when Grafana's response is decoded and
//! cannot reach these records.

use grafana_client::DataSource;
use serde::Serialize;
use serde_json::{Map, Value};

use super::ToolArgs;
use crate::dispatch::GrafanaApi;
use crate::error::ToolError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DataSourceSummary {
    uid: Option<String>,
    name: Option<String>,
    #[serde(rename = "type")]
    datasource_type: Option<String>,
    url: Option<String>,
    is_default: bool,
    read_only: bool,
}

impl From<DataSource> for DataSourceSummary {
    fn from(ds: DataSource) -> Self {
        Self {
            uid: ds.uid,
            name: ds.name,
            datasource_type: ds.datasource_type,
            url: ds.url,
            is_default: ds.is_default,
            read_only: ds.read_only,
        }
    }
}

#[derive(Debug, Serialize)]
struct DataSourceList {
    total: usize,
    datasources: Vec<DataSourceSummary>,
}

pub(crate) async fn get_datasources<C: GrafanaApi>(client: &C) -> Result<Value, ToolError> {
    let datasources: Vec<DataSourceSummary> = client
        .get_datasources()
        .await?
        .into_iter()
        .map(DataSourceSummary::from)
        .collect();

    Ok(serde_json::to_value(DataSourceList {
        total: datasources.len(),
        datasources,
    })?)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DataSourceDetail {
    uid: Option<String>,
    name: Option<String>,
    #[serde(rename = "type")]
    datasource_type: Option<String>,
    url: Option<String>,
    access: Option<String>,
    is_default: bool,
    json_data: Map<String, Value>,
    read_only: bool,
    version: Option<i64>,
}

impl From<DataSource> for DataSourceDetail {
    fn from(ds: DataSource) -> Self {
        Self {
            uid: ds.uid,
            name: ds.name,
            datasource_type: ds.datasource_type,
            url: ds.url,
            access: ds.access,
            is_default: ds.is_default,
            json_data: ds.json_data,
            read_only: ds.read_only,
            version: ds.version,
        }
    }
}

pub(crate) async fn get_datasource<C: GrafanaApi>(
    client: &C,
    args: &ToolArgs,
) -> Result<Value, ToolError> {
    let uid = args.required_str("uid")?;
    let datasource = client.get_datasource(uid).await?;
    Ok(serde_json::to_value(DataSourceDetail::from(datasource))?)
}
