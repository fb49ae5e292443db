//! Grafana HTTP API client.
//!
//! This crate provides a typed, read-only client for the Grafana HTTP API.
//! Requests carry a static bearer token; nothing is cached or retried.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
mod serde_helpers;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use client::GrafanaClient;
pub use client::builder::GrafanaClientBuilder;
pub use error::{ClientError, Result};
pub use models::{
    Dashboard, DashboardEnvelope, DashboardMeta, DashboardSearch, DashboardTag, DataSource,
    Folder, HealthStatus, OrgInfo, PagedSearch, Panel, Refresh, RowPanel, SearchHit,
    SearchPage, TemplateVariable, Templating, VisualizationPanel,
};
