//! Dashboard API methods for [`GrafanaClient`].
//!
//! # What this module handles:
//! - Fetching a dashboard by uid
//! - Fetching the home dashboard
//! - Listing dashboard tags
//!
//! # What this module does NOT handle:
//! - Low-level dashboard endpoint HTTP calls (in [`crate::endpoints`])

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{DashboardEnvelope, DashboardTag};

impl GrafanaClient {
    /// Get a dashboard and its metadata by uid.
    pub async fn get_dashboard(&self, uid: &str) -> Result<DashboardEnvelope> {
        crate::api_call!(
            self,
            endpoints::get_dashboard(&self.http, &self.base_url, uid).await
        )
    }

    /// Get the home dashboard.
    pub async fn get_home_dashboard(&self) -> Result<DashboardEnvelope> {
        crate::api_call!(
            self,
            endpoints::get_home_dashboard(&self.http, &self.base_url).await
        )
    }

    /// List all dashboard tags with usage counts.
    pub async fn get_dashboard_tags(&self) -> Result<Vec<DashboardTag>> {
        crate::api_call!(
            self,
            endpoints::get_dashboard_tags(&self.http, &self.base_url).await
        )
    }
}
