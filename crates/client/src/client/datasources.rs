//! Data source API methods for [`GrafanaClient`].

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::DataSource;

impl GrafanaClient {
    /// List all data sources.
    pub async fn get_datasources(&self) -> Result<Vec<DataSource>> {
        crate::api_call!(
            self,
            endpoints::get_datasources(&self.http, &self.base_url).await
        )
    }

    /// Get a data source by uid.
    pub async fn get_datasource(&self, uid: &str) -> Result<DataSource> {
        crate::api_call!(
            self,
            endpoints::get_datasource(&self.http, &self.base_url, uid).await
        )
    }
}
