//! Panel models.
//!
//! Grafana stores panels as one flat JSON shape discriminated by `type`.
//! Layout rows (`"type": "row"`) group other panels; a collapsed row keeps
//! its children in its own `panels` array, so panels form a forest of depth
//! at most two. [`Panel`] decodes that shape into a sum type.

use serde::Deserialize;
use serde_json::Value;

use crate::serde_helpers::{null_as_default, opt_u64_from_string_or_number};

/// The `type` discriminator of a layout row.
pub const ROW_PANEL_TYPE: &str = "row";

/// A top-level dashboard panel.
#[derive(Debug, Deserialize, Clone)]
#[serde(from = "RawPanel")]
pub enum Panel {
    Row(RowPanel),
    Visualization(VisualizationPanel),
}

impl Panel {
    pub fn id(&self) -> Option<i64> {
        match self {
            Panel::Row(row) => row.id,
            Panel::Visualization(panel) => panel.id,
        }
    }
}

/// A layout row.
#[derive(Debug, Clone, Default)]
pub struct RowPanel {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub collapsed: bool,
    pub grid_pos: Option<Value>,
    pub repeat: Option<String>,
    /// Children of the row, present when Grafana stores them inside the row.
    pub panels: Option<Vec<VisualizationPanel>>,
}

/// Any non-row panel.
///
/// Query targets, data source references, grid position, field config,
/// options and links are plugin-specific and stay raw JSON.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct VisualizationPanel {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "type", default)]
    pub panel_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub datasource: Option<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub targets: Vec<Value>,
    #[serde(default)]
    pub grid_pos: Option<Value>,
    #[serde(default)]
    pub field_config: Option<Value>,
    #[serde(default)]
    pub options: Option<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub transparent: bool,
    #[serde(default)]
    pub links: Option<Value>,
    #[serde(default)]
    pub repeat: Option<String>,
    #[serde(default)]
    pub interval: Option<String>,
    #[serde(default, deserialize_with = "opt_u64_from_string_or_number")]
    pub max_data_points: Option<u64>,
}

/// Wire shape shared by every panel type.
#[derive(Deserialize)]
struct RawPanel {
    #[serde(flatten)]
    common: VisualizationPanel,
    #[serde(default, deserialize_with = "null_as_default")]
    collapsed: bool,
    #[serde(default)]
    panels: Option<Vec<VisualizationPanel>>,
}

impl From<RawPanel> for Panel {
    fn from(raw: RawPanel) -> Self {
        if raw.common.panel_type.as_deref() == Some(ROW_PANEL_TYPE) {
            Panel::Row(RowPanel {
                id: raw.common.id,
                title: raw.common.title,
                collapsed: raw.collapsed,
                grid_pos: raw.common.grid_pos,
                repeat: raw.common.repeat,
                panels: raw.panels,
            })
        } else {
            Panel::Visualization(raw.common)
        }
    }
}
