//! Instance health and organization endpoints.

use reqwest::Client;

use crate::endpoints::send_request;
use crate::error::Result;
use crate::models::{HealthStatus, OrgInfo};

/// Get instance health (database status and version).
pub async fn get_health(client: &Client, base_url: &str) -> Result<HealthStatus> {
    let endpoint = "/api/health";
    let builder = client.get(format!("{}{}", base_url, endpoint));
    send_request(builder, endpoint, "GET").await
}

/// Get the organization the token is scoped to.
pub async fn get_org(client: &Client, base_url: &str) -> Result<OrgInfo> {
    let endpoint = "/api/org";
    let builder = client.get(format!("{}{}", base_url, endpoint));
    send_request(builder, endpoint, "GET").await
}
