//! Campaign endpoints.

use serde::Serialize;

use sc_core::error::ScResult;

use crate::client::ApiClient;
use crate::endpoints::ListQuery;
use crate::validate;

/// Parameters for creating a campaign.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateCampaignParams {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Whether the campaign's rotator page is publicly visible.
    pub public: bool,
}

/// Parameters for updating a campaign. `name` is required by the API.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCampaignParams {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
}

impl ApiClient {
    /// List campaigns.
    pub async fn list_campaigns(&self, query: &ListQuery) -> ScResult<serde_json::Value> {
        self.get_with("campaigns", query).await
    }

    /// Create a campaign.
    pub async fn create_campaign(
        &self,
        params: &CreateCampaignParams,
    ) -> ScResult<serde_json::Value> {
        validate::ensure_required("name", &params.name)?;
        let body = serde_json::to_value(params)?;
        self.post("campaign/add", &body).await
    }

    /// Assign a link to a campaign.
    pub async fn assign_link_to_campaign(
        &self,
        campaign_id: i64,
        link_id: i64,
    ) -> ScResult<serde_json::Value> {
        self.post(
            &format!("campaign/{campaign_id}/assign/{link_id}"),
            &serde_json::json!({}),
        )
        .await
    }

    /// Update a campaign.
    pub async fn update_campaign(
        &self,
        campaign_id: i64,
        params: &UpdateCampaignParams,
    ) -> ScResult<serde_json::Value> {
        validate::ensure_required("name", &params.name)?;
        let body = serde_json::to_value(params)?;
        self.put(&format!("campaign/{campaign_id}/update"), &body)
            .await
    }

    /// Delete a campaign.
    pub async fn delete_campaign(&self, campaign_id: i64) -> ScResult<serde_json::Value> {
        self.delete(&format!("campaign/{campaign_id}/delete")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_params_serialize() {
        let params = CreateCampaignParams {
            name: "Summer launch".into(),
            slug: None,
            public: true,
        };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["name"], "Summer launch");
        assert_eq!(json["public"], true);
        assert!(json.get("slug").is_none());
    }

    #[test]
    fn test_update_params_optional_public() {
        let params = UpdateCampaignParams {
            name: "Renamed".into(),
            ..UpdateCampaignParams::default()
        };
        let json = serde_json::to_value(&params).unwrap();
        assert!(json.get("public").is_none());
    }
}
