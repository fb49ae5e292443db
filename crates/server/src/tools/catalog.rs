//! The fixed tool catalog.
//!
//! Names, descriptions and input schemas are part of the public contract
//! with callers and must not drift.

use serde::Serialize;
use serde_json::{Value, json};

/// One of the nine catalogued tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tool {
    GetDashboard,
    GetPanel,
    ListDashboards,
    GetDashboardVariables,
    ListFolders,
    SearchByTag,
    GetDashboardTags,
    GetDatasources,
    GetDatasource,
}

impl Tool {
    /// Catalog order, as listed to callers.
    pub(crate) const ALL: [Tool; 9] = [
        Tool::GetDashboard,
        Tool::GetPanel,
        Tool::ListDashboards,
        Tool::GetDashboardVariables,
        Tool::ListFolders,
        Tool::SearchByTag,
        Tool::GetDashboardTags,
        Tool::GetDatasources,
        Tool::GetDatasource,
    ];

    pub(crate) fn name(self) -> &'static str {
        match self {
            Tool::GetDashboard => "get_dashboard",
            Tool::GetPanel => "get_panel",
            Tool::ListDashboards => "list_dashboards",
            Tool::GetDashboardVariables => "get_dashboard_variables",
            Tool::ListFolders => "list_folders",
            Tool::SearchByTag => "search_by_tag",
            Tool::GetDashboardTags => "get_dashboard_tags",
            Tool::GetDatasources => "get_datasources",
            Tool::GetDatasource => "get_datasource",
        }
    }

    pub(crate) fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.name() == name)
    }

    fn description(self) -> &'static str {
        match self {
            Tool::GetDashboard => {
                "Get complete dashboard information including metadata, panels, and configuration. \
                 Use this to inspect a specific dashboard by its UID."
            }
            Tool::GetPanel => {
                "Get detailed information about a specific panel including queries, \
                 visualization settings, and field configurations."
            }
            Tool::ListDashboards => {
                "List all accessible dashboards with optional filtering by query, tag, or folder. \
                 Use this to discover available dashboards."
            }
            Tool::GetDashboardVariables => {
                "Get all template variables configured for a dashboard. \
                 Variables are used for dynamic filtering and parameterization."
            }
            Tool::ListFolders => {
                "List all dashboard folders to understand dashboard organization."
            }
            Tool::SearchByTag => "Search for dashboards by one or more tags.",
            Tool::GetDashboardTags => "Get all available dashboard tags with usage counts.",
            Tool::GetDatasources => "List all configured data sources in Grafana.",
            Tool::GetDatasource => "Get detailed information about a specific data source by UID.",
        }
    }

    fn input_schema(self) -> Value {
        match self {
            Tool::GetDashboard => json!({
                "type": "object",
                "properties": {
                    "dashboard_uid": {
                        "type": "string",
                        "description": "The UID of the dashboard (found in the dashboard URL)",
                    },
                    "include_panels": {
                        "type": "boolean",
                        "description": "Include detailed panel information (default: true)",
                        "default": true,
                    },
                },
                "required": ["dashboard_uid"],
            }),
            Tool::GetPanel => json!({
                "type": "object",
                "properties": {
                    "dashboard_uid": {
                        "type": "string",
                        "description": "The UID of the dashboard",
                    },
                    "panel_id": {
                        "type": "integer",
                        "description": "The ID of the panel (visible in panel edit mode)",
                    },
                },
                "required": ["dashboard_uid", "panel_id"],
            }),
            Tool::ListDashboards => json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search query to filter dashboards by title",
                    },
                    "tag": {
                        "type": "string",
                        "description": "Filter dashboards by tag",
                    },
                    "folder_ids": {
                        "type": "string",
                        "description": "Comma-separated folder IDs to filter by",
                    },
                    "starred": {
                        "type": "boolean",
                        "description": "Show only starred dashboards",
                        "default": false,
                    },
                    "limit": {
                        "type": "integer",
                        "description": "Maximum number of results (default: 100)",
                        "default": 100,
                    },
                },
            }),
            Tool::GetDashboardVariables => json!({
                "type": "object",
                "properties": {
                    "dashboard_uid": {
                        "type": "string",
                        "description": "The UID of the dashboard",
                    },
                },
                "required": ["dashboard_uid"],
            }),
            Tool::ListFolders => json!({
                "type": "object",
                "properties": {
                    "limit": {
                        "type": "integer",
                        "description": "Maximum number of folders to return (default: 100)",
                        "default": 100,
                    },
                },
            }),
            Tool::SearchByTag => json!({
                "type": "object",
                "properties": {
                    "tags": {
                        "type": "string",
                        "description": "Comma-separated list of tags to search for",
                    },
                },
                "required": ["tags"],
            }),
            Tool::GetDashboardTags | Tool::GetDatasources => json!({
                "type": "object",
                "properties": {},
            }),
            Tool::GetDatasource => json!({
                "type": "object",
                "properties": {
                    "uid": {
                        "type": "string",
                        "description": "The UID of the data source",
                    },
                },
                "required": ["uid"],
            }),
        }
    }
}

/// A catalog entry as listed by `tools/list`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

/// Every catalogued tool, in catalog order.
pub(crate) fn definitions() -> Vec<ToolDefinition> {
    Tool::ALL
        .into_iter()
        .map(|tool| ToolDefinition {
            name: tool.name(),
            description: tool.description(),
            input_schema: tool.input_schema(),
        })
        .collect()
}
