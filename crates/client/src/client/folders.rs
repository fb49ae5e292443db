//! Folder API methods for [`GrafanaClient`].

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Folder, SearchHit};

impl GrafanaClient {
    /// List up to `limit` folders.
    pub async fn list_folders(&self, limit: u64) -> Result<Vec<SearchHit>> {
        crate::api_call!(
            self,
            endpoints::list_folders(&self.http, &self.base_url, limit).await
        )
    }

    /// Get a folder by uid.
    pub async fn get_folder(&self, uid: &str) -> Result<Folder> {
        crate::api_call!(
            self,
            endpoints::get_folder(&self.http, &self.base_url, uid).await
        )
    }
}
