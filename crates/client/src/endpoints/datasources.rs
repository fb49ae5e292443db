//! Data source endpoints.

use reqwest::Client;

use crate::endpoints::send_request;
use crate::endpoints::url_encoding::encode_path_segment;
use crate::error::Result;
use crate::models::DataSource;

/// List all data sources of the current organization.
pub async fn get_datasources(client: &Client, base_url: &str) -> Result<Vec<DataSource>> {
    let endpoint = "/api/datasources";
    let builder = client.get(format!("{}{}", base_url, endpoint));
    send_request(builder, endpoint, "GET").await
}

/// Get a data source by uid.
pub async fn get_datasource(client: &Client, base_url: &str, uid: &str) -> Result<DataSource> {
    let endpoint = format!("/api/datasources/uid/{}", encode_path_segment(uid));
    let builder = client.get(format!("{}{}", base_url, endpoint));
    send_request(builder, &endpoint, "GET").await
}
