//! Dashboard endpoints.

use reqwest::Client;

use crate::endpoints::send_request;
use crate::endpoints::url_encoding::encode_path_segment;
use crate::error::Result;
use crate::models::{DashboardEnvelope, DashboardTag};

/// Get a dashboard and its metadata by uid.
pub async fn get_dashboard(
    client: &Client,
    base_url: &str,
    uid: &str,
) -> Result<DashboardEnvelope> {
    let endpoint = format!("/api/dashboards/uid/{}", encode_path_segment(uid));
    let builder = client.get(format!("{}{}", base_url, endpoint));
    send_request(builder, &endpoint, "GET").await
}

/// Get the home dashboard of the current user and organization.
pub async fn get_home_dashboard(client: &Client, base_url: &str) -> Result<DashboardEnvelope> {
    let endpoint = "/api/dashboards/home";
    let builder = client.get(format!("{}{}", base_url, endpoint));
    send_request(builder, endpoint, "GET").await
}

/// List every dashboard tag with its usage count.
pub async fn get_dashboard_tags(client: &Client, base_url: &str) -> Result<Vec<DashboardTag>> {
    let endpoint = "/api/dashboards/tags";
    let builder = client.get(format!("{}{}", base_url, endpoint));
    send_request(builder, endpoint, "GET").await
}
