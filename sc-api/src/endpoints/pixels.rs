//! Tracking pixel endpoints.

use serde::Serialize;

use sc_core::constants;
use sc_core::error::ScResult;

use crate::client::ApiClient;
use crate::endpoints::ListQuery;
use crate::validate;

/// Parameters for creating a tracking pixel. All fields are required.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreatePixelParams {
    /// Provider, e.g. "facebook" or "adwords".
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    /// The provider-issued pixel tag.
    pub tag: String,
}

/// Parameters for updating a tracking pixel.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdatePixelParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl ApiClient {
    /// List tracking pixels.
    pub async fn list_pixels(&self, query: &ListQuery) -> ScResult<serde_json::Value> {
        self.get_with("pixels", query).await
    }

    /// Create a tracking pixel.
    pub async fn create_pixel(&self, params: &CreatePixelParams) -> ScResult<serde_json::Value> {
        validate::ensure_required("type", &params.kind)?;
        validate::ensure_one_of("type", &params.kind, constants::pixel_types::ALL)?;
        validate::ensure_required("name", &params.name)?;
        validate::ensure_required("tag", &params.tag)?;
        let body = serde_json::to_value(params)?;
        self.post("pixel/add", &body).await
    }

    /// Update a tracking pixel.
    pub async fn update_pixel(
        &self,
        pixel_id: i64,
        params: &UpdatePixelParams,
    ) -> ScResult<serde_json::Value> {
        let body = serde_json::to_value(params)?;
        self.put(&format!("pixel/{pixel_id}/update"), &body).await
    }

    /// Delete a tracking pixel.
    pub async fn delete_pixel(&self, pixel_id: i64) -> ScResult<serde_json::Value> {
        self.delete(&format!("pixel/{pixel_id}/delete")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_params_type_rename() {
        let params = CreatePixelParams {
            kind: "facebook".into(),
            name: "fb-main".into(),
            tag: "<script>fbq()</script>".into(),
        };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["type"], "facebook");
        assert!(json.get("kind").is_none());
    }
}
