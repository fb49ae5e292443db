//! Health and organization API methods for [`GrafanaClient`].

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{HealthStatus, OrgInfo};

impl GrafanaClient {
    /// Get instance health.
    pub async fn health(&self) -> Result<HealthStatus> {
        crate::api_call!(self, endpoints::get_health(&self.http, &self.base_url).await)
    }

    /// Get the organization the token is scoped to.
    pub async fn get_org(&self) -> Result<OrgInfo> {
        crate::api_call!(self, endpoints::get_org(&self.http, &self.base_url).await)
    }
}
