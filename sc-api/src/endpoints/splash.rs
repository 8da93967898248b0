//! Custom splash page endpoints.
//!
//! Splash pages are managed in the dashboard; the API only lists them so
//! their ids can be referenced when shortening links.

use sc_core::error::ScResult;

use crate::client::ApiClient;
use crate::endpoints::ListQuery;

impl ApiClient {
    /// List custom splash pages.
    pub async fn list_splash(&self, query: &ListQuery) -> ScResult<serde_json::Value> {
        self.get_with("splash", query).await
    }
}
