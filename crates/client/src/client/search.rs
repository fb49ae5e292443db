//! Search API methods for [`GrafanaClient`].

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{DashboardSearch, PagedSearch, SearchHit, SearchPage};

impl GrafanaClient {
    /// Search dashboards.
    pub async fn search_dashboards(&self, search: &DashboardSearch) -> Result<Vec<SearchHit>> {
        crate::api_call!(
            self,
            endpoints::search_dashboards(&self.http, &self.base_url, search).await
        )
    }

    /// Search dashboards one page at a time.
    ///
    /// `total` on the returned page counts the hits on that page only.
    pub async fn search_with_pagination(&self, search: &PagedSearch) -> Result<SearchPage> {
        crate::api_call!(
            self,
            endpoints::search_with_pagination(&self.http, &self.base_url, search).await
        )
    }
}
