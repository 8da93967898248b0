//! Branded domain endpoints.

use serde::Serialize;

use sc_core::error::ScResult;

use crate::client::ApiClient;
use crate::endpoints::ListQuery;
use crate::validate;

/// Parameters for registering a branded domain.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateDomainParams {
    /// The domain to brand, e.g. "https://go.example.com".
    pub domain: String,
    /// Where the domain root redirects.
    #[serde(rename = "redirectroot", skip_serializing_if = "Option::is_none")]
    pub redirect_root: Option<String>,
    /// Where unknown short URLs redirect.
    #[serde(rename = "redirect404", skip_serializing_if = "Option::is_none")]
    pub redirect_404: Option<String>,
}

/// Parameters for updating a branded domain.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateDomainParams {
    #[serde(rename = "redirectroot", skip_serializing_if = "Option::is_none")]
    pub redirect_root: Option<String>,
    #[serde(rename = "redirect404", skip_serializing_if = "Option::is_none")]
    pub redirect_404: Option<String>,
}

impl ApiClient {
    /// List branded domains.
    pub async fn list_domains(&self, query: &ListQuery) -> ScResult<serde_json::Value> {
        self.get_with("domains", query).await
    }

    /// Register a branded domain.
    pub async fn create_domain(&self, params: &CreateDomainParams) -> ScResult<serde_json::Value> {
        validate::ensure_required("domain", &params.domain)?;
        let body = serde_json::to_value(params)?;
        self.post("domain/add", &body).await
    }

    /// Update a branded domain's redirects.
    pub async fn update_domain(
        &self,
        domain_id: i64,
        params: &UpdateDomainParams,
    ) -> ScResult<serde_json::Value> {
        let body = serde_json::to_value(params)?;
        self.put(&format!("domain/{domain_id}/update"), &body).await
    }

    /// Delete a branded domain.
    pub async fn delete_domain(&self, domain_id: i64) -> ScResult<serde_json::Value> {
        self.delete(&format!("domain/{domain_id}/delete")).await
    }
}
