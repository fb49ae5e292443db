//! Panel records, panel-tree flattening and the `get_panel` tool.
//!
//! Responsibilities:
//! - Project [`VisualizationPanel`] and [`RowPanel`] into output records.
//! - Flatten a dashboard's panel forest depth-first, rows before their children.
//! - Find a panel by id at the top level or one level inside a row.
//!
//! Invariants:
//! - Rows are never nested inside rows, so flattening is at most two levels deep.

use grafana_client::models::panels::ROW_PANEL_TYPE;
use grafana_client::{Panel, RowPanel, VisualizationPanel};
use serde::Serialize;
use serde_json::Value;

use super::ToolArgs;
use crate::dispatch::GrafanaApi;
use crate::error::ToolError;

const DEFAULT_PANEL_TITLE: &str = "Untitled";
const DEFAULT_ROW_TITLE: &str = "Row";

/// Full description of one panel.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PanelRecord {
    pub id: Option<i64>,
    pub title: String,
    #[serde(rename = "type")]
    pub panel_type: Option<String>,
    pub description: Option<String>,
    pub datasource: Option<Value>,
    pub targets: Vec<Value>,
    pub grid_pos: Option<Value>,
    pub field_config: Option<Value>,
    pub options: Option<Value>,
    pub transparent: bool,
    pub links: Option<Value>,
    pub repeat: Option<String>,
    pub interval: Option<String>,
    pub max_data_points: Option<u64>,
}

impl From<&VisualizationPanel> for PanelRecord {
    fn from(panel: &VisualizationPanel) -> Self {
        Self {
            id: panel.id,
            title: panel
                .title
                .clone()
                .unwrap_or_else(|| DEFAULT_PANEL_TITLE.to_string()),
            panel_type: panel.panel_type.clone(),
            description: panel.description.clone(),
            datasource: panel.datasource.clone(),
            targets: panel.targets.clone(),
            grid_pos: panel.grid_pos.clone(),
            field_config: panel.field_config.clone(),
            options: panel.options.clone(),
            transparent: panel.transparent,
            links: panel.links.clone(),
            repeat: panel.repeat.clone(),
            interval: panel.interval.clone(),
            max_data_points: panel.max_data_points,
        }
    }
}

impl From<&RowPanel> for PanelRecord {
    fn from(row: &RowPanel) -> Self {
        Self {
            id: row.id,
            title: row
                .title
                .clone()
                .unwrap_or_else(|| DEFAULT_PANEL_TITLE.to_string()),
            panel_type: Some(ROW_PANEL_TYPE.to_string()),
            description: None,
            datasource: None,
            targets: Vec::new(),
            grid_pos: row.grid_pos.clone(),
            field_config: None,
            options: None,
            transparent: false,
            links: None,
            repeat: row.repeat.clone(),
            interval: None,
            max_data_points: None,
        }
    }
}

/// A row as it appears in a flattened panel list.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub(crate) struct RowSummary {
    pub id: Option<i64>,
    pub title: String,
    #[serde(rename = "type")]
    pub row_type: &'static str,
    pub collapsed: bool,
}

impl From<&RowPanel> for RowSummary {
    fn from(row: &RowPanel) -> Self {
        Self {
            id: row.id,
            title: row
                .title
                .clone()
                .unwrap_or_else(|| DEFAULT_ROW_TITLE.to_string()),
            row_type: ROW_PANEL_TYPE,
            collapsed: row.collapsed,
        }
    }
}

/// One entry of a flattened panel list.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub(crate) enum FlatPanel {
    Row(RowSummary),
    Panel(PanelRecord),
}

/// Flatten the panel forest: each row is followed by the children it holds.
pub(crate) fn flatten_panels(panels: &[Panel]) -> Vec<FlatPanel> {
    let mut flat = Vec::with_capacity(panels.len());
    for panel in panels {
        match panel {
            Panel::Row(row) => {
                flat.push(FlatPanel::Row(RowSummary::from(row)));
                flat.extend(
                    row.panels
                        .iter()
                        .flatten()
                        .map(|child| FlatPanel::Panel(PanelRecord::from(child))),
                );
            }
            Panel::Visualization(visualization) => {
                flat.push(FlatPanel::Panel(PanelRecord::from(visualization)));
            }
        }
    }
    flat
}

/// Find panel `id`, checking each top-level panel before the children of a row.
pub(crate) fn find_panel(panels: &[Panel], id: i64) -> Option<PanelRecord> {
    panels.iter().find_map(|panel| {
        if panel.id() == Some(id) {
            return Some(match panel {
                Panel::Row(row) => PanelRecord::from(row),
                Panel::Visualization(visualization) => PanelRecord::from(visualization),
            });
        }
        match panel {
            Panel::Row(row) => row
                .panels
                .iter()
                .flatten()
                .find(|child| child.id == Some(id))
                .map(PanelRecord::from),
            Panel::Visualization(_) => None,
        }
    })
}

#[derive(Debug, Serialize)]
struct PanelDetail {
    #[serde(flatten)]
    panel: PanelRecord,
    dashboard_title: Option<String>,
    dashboard_uid: String,
}

pub(crate) async fn get_panel<C: GrafanaApi>(
    client: &C,
    args: &ToolArgs,
) -> Result<Value, ToolError> {
    let dashboard_uid = args.required_str("dashboard_uid")?;
    let panel_id = args.required_id("panel_id")?;

    let envelope = client.get_dashboard(dashboard_uid).await?;
    let panel = find_panel(&envelope.dashboard.panels, panel_id).ok_or_else(|| {
        ToolError::PanelNotFound {
            panel_id,
            dashboard_uid: dashboard_uid.to_string(),
        }
    })?;

    Ok(serde_json::to_value(PanelDetail {
        panel,
        dashboard_title: envelope.dashboard.title,
        dashboard_uid: dashboard_uid.to_string(),
    })?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeGrafana;
    use grafana_client::DashboardEnvelope;
    use grafana_client::testing::load_model;
    use proptest::prelude::*;
    use serde_json::json;

    fn flat_id(entry: &FlatPanel) -> Option<i64> {
        match entry {
            FlatPanel::Row(row) => row.id,
            FlatPanel::Panel(panel) => panel.id,
        }
    }

    fn rows_dashboard() -> DashboardEnvelope {
        load_model("dashboards/rows_dashboard.json")
    }

    #[test]
    fn test_flatten_without_rows_keeps_order() {
        let envelope: DashboardEnvelope = load_model("dashboards/sample_dashboard.json");
        let flat = flatten_panels(&envelope.dashboard.panels);

        let ids: Vec<_> = flat.iter().map(flat_id).collect();
        assert_eq!(ids, vec![Some(1), Some(2)]);
        assert!(matches!(&flat[0], FlatPanel::Panel(p) if p.panel_type.as_deref() == Some("graph")));
    }

    #[test]
    fn test_flatten_puts_rows_before_their_children() {
        let flat = flatten_panels(&rows_dashboard().dashboard.panels);

        let ids: Vec<_> = flat.iter().map(flat_id).collect();
        assert_eq!(ids, vec![Some(1), Some(2), Some(3), Some(4), Some(5), Some(6)]);

        let FlatPanel::Row(expanded) = &flat[1] else {
            panic!("expected a row summary at index 1");
        };
        assert_eq!(expanded.title, "Replication");
        assert!(!expanded.collapsed);

        let FlatPanel::Row(collapsed) = &flat[3] else {
            panic!("expected a row summary at index 3");
        };
        assert_eq!(collapsed.title, "Row");
        assert!(collapsed.collapsed);
    }

    #[test]
    fn test_row_summary_serializes_four_fields() {
        let flat = flatten_panels(&rows_dashboard().dashboard.panels);
        assert_eq!(
            serde_json::to_value(&flat[3]).unwrap(),
            json!({"id": 4, "title": "Row", "type": "row", "collapsed": true})
        );
    }

    #[test]
    fn test_panel_record_defaults() {
        let flat = flatten_panels(&rows_dashboard().dashboard.panels);
        let value = serde_json::to_value(&flat[4]).unwrap();

        assert_eq!(value["title"], "Disk Usage");
        assert_eq!(value["type"], "gauge");
        assert_eq!(value["targets"], json!([]));
        assert_eq!(value["transparent"], false);
        assert_eq!(value["description"], Value::Null);
        assert_eq!(value["maxDataPoints"], Value::Null);
        assert_eq!(value["gridPos"], json!({"h": 6, "w": 12, "x": 0, "y": 16}));
        assert_eq!(value.as_object().unwrap().len(), 14);
    }

    #[test]
    fn test_find_panel_top_level_and_nested() {
        let panels = rows_dashboard().dashboard.panels;

        assert_eq!(find_panel(&panels, 3).unwrap().title, "Replica Lag");
        assert_eq!(find_panel(&panels, 6).unwrap().title, "Slow Queries");
        assert!(find_panel(&panels, 99).is_none());
    }

    #[test]
    fn test_find_panel_reports_matching_row_as_row_record() {
        let panels = rows_dashboard().dashboard.panels;
        let record = find_panel(&panels, 4).unwrap();

        assert_eq!(record.panel_type.as_deref(), Some("row"));
        assert_eq!(record.title, "Untitled");
        assert!(record.targets.is_empty());
    }

    #[tokio::test]
    async fn test_get_panel_annotates_dashboard() {
        let client = FakeGrafana::with_fixtures();
        let args =
            ToolArgs::from_value(json!({"dashboard_uid": "svc-overview", "panel_id": 1})).unwrap();

        let value = get_panel(&client, &args).await.unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["title"], "Request Rate");
        assert_eq!(value["maxDataPoints"], 500);
        assert_eq!(value["interval"], "1m");
        assert_eq!(value["dashboard_title"], "Service Overview");
        assert_eq!(value["dashboard_uid"], "svc-overview");
    }

    #[tokio::test]
    async fn test_get_panel_accepts_string_id_for_nested_panel() {
        let client = FakeGrafana::with_fixtures();
        let args =
            ToolArgs::from_value(json!({"dashboard_uid": "db-health", "panel_id": "5"})).unwrap();

        let value = get_panel(&client, &args).await.unwrap();
        assert_eq!(value["title"], "Disk Usage");
        assert_eq!(value["dashboard_uid"], "db-health");
    }

    #[tokio::test]
    async fn test_get_panel_not_found() {
        let client = FakeGrafana::with_fixtures();
        let args =
            ToolArgs::from_value(json!({"dashboard_uid": "svc-overview", "panel_id": 42})).unwrap();

        let err = get_panel(&client, &args).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Panel 42 not found in dashboard svc-overview"
        );
    }

    fn arb_leaf() -> impl Strategy<Value = VisualizationPanel> {
        (0i64..1000, prop::option::of("[a-z]{1,8}")).prop_map(|(id, panel_type)| {
            VisualizationPanel {
                id: Some(id),
                panel_type,
                ..VisualizationPanel::default()
            }
        })
    }

    fn arb_panel() -> impl Strategy<Value = Panel> {
        prop_oneof![
            arb_leaf().prop_map(Panel::Visualization),
            (
                0i64..1000,
                any::<bool>(),
                prop::option::of(prop::collection::vec(arb_leaf(), 0..4)),
            )
                .prop_map(|(id, collapsed, panels)| {
                    Panel::Row(RowPanel {
                        id: Some(id),
                        collapsed,
                        panels,
                        ..RowPanel::default()
                    })
                }),
        ]
    }

    fn expected_ids(panels: &[Panel]) -> Vec<Option<i64>> {
        let mut ids = Vec::new();
        for panel in panels {
            ids.push(panel.id());
            if let Panel::Row(row) = panel {
                ids.extend(row.panels.iter().flatten().map(|child| child.id));
            }
        }
        ids
    }

    proptest! {
        #[test]
        fn prop_flatten_is_depth_first(panels in prop::collection::vec(arb_panel(), 0..8)) {
            let flat = flatten_panels(&panels);
            let ids: Vec<_> = flat.iter().map(flat_id).collect();
            prop_assert_eq!(ids, expected_ids(&panels));
        }

        #[test]
        fn prop_every_flattened_id_is_found(panels in prop::collection::vec(arb_panel(), 0..8)) {
            for entry in flatten_panels(&panels) {
                let id = flat_id(&entry).unwrap();
                let found = find_panel(&panels, id);
                prop_assert_eq!(found.map(|record| record.id), Some(Some(id)));
            }
        }
    }
}
