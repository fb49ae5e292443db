//! Folder endpoints.

use reqwest::Client;

use crate::endpoints::send_request;
use crate::endpoints::url_encoding::encode_path_segment;
use crate::error::Result;
use crate::models::{Folder, SearchHit};

/// List folders through the search API (`type=dash-folder`).
pub async fn list_folders(client: &Client, base_url: &str, limit: u64) -> Result<Vec<SearchHit>> {
    let endpoint = "/api/search";
    let query_params = [("type", "dash-folder".to_string()), ("limit", limit.to_string())];

    let builder = client
        .get(format!("{}{}", base_url, endpoint))
        .query(&query_params);

    send_request(builder, endpoint, "GET").await
}

/// Get a folder by uid.
pub async fn get_folder(client: &Client, base_url: &str, uid: &str) -> Result<Folder> {
    let endpoint = format!("/api/folders/{}", encode_path_segment(uid));
    let builder = client.get(format!("{}{}", base_url, endpoint));
    send_request(builder, &endpoint, "GET").await
}
