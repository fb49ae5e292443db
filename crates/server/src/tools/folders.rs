//! The `list_folders` tool.

use grafana_client::SearchHit;
use grafana_config::constants::DEFAULT_SEARCH_LIMIT;
use serde::Serialize;
use serde_json::Value;

use super::ToolArgs;
use crate::dispatch::GrafanaApi;
use crate::error::ToolError;

#[derive(Debug, Serialize)]
struct FolderList {
    total: usize,
    folders: Vec<SearchHit>,
}

pub(crate) async fn list_folders<C: GrafanaApi>(
    client: &C,
    args: &ToolArgs,
) -> Result<Value, ToolError> {
    let limit = args.u64_or("limit", DEFAULT_SEARCH_LIMIT)?;
    let folders = client.list_folders(limit).await?;

    Ok(serde_json::to_value(FolderList {
        total: folders.len(),
        folders,
    })?)
}
