//! Data models for Grafana API responses.
//!
//! This module provides types for deserializing Grafana HTTP API responses.
//! Types are organized by resource in submodules and re-exported here
//! for convenient access.
//!
//! Every field is optional or defaulted: Grafana omits fields freely and
//! dashboard JSON is user-authored, so decoding never requires a field to be
//! present.

pub mod dashboards;
pub mod datasources;
pub mod folders;
pub mod panels;
pub mod search;
pub mod server;

pub use dashboards::{
    Dashboard, DashboardEnvelope, DashboardMeta, DashboardTag, Refresh, TemplateVariable,
    Templating,
};
pub use datasources::DataSource;
pub use folders::Folder;
pub use panels::{Panel, RowPanel, VisualizationPanel};
pub use search::{DashboardSearch, PagedSearch, SearchHit, SearchPage};
pub use server::{HealthStatus, OrgInfo};
