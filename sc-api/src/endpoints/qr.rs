//! QR code endpoints.

use serde::Serialize;
use serde_json::Value;

use sc_core::constants;
use sc_core::error::{ScError, ScResult};

use crate::client::ApiClient;
use crate::endpoints::ListQuery;
use crate::validate;

/// Parameters for creating a QR code. `kind` and `data` are required.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateQrParams {
    /// Content type, e.g. "link", "text", "wifi".
    #[serde(rename = "type")]
    pub kind: String,
    /// QR content: a plain string, or a structured object for types like
    /// wifi and vcard.
    pub data: Value,
    /// Background color as "rgb(r,g,b)".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Foreground color as "rgb(r,g,b)".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    /// URL of a logo to embed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// Parameters for updating a QR code. `data` is required by the API.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateQrParams {
    pub data: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// The QR `data` field must be a non-empty string or an object.
fn ensure_qr_data(data: &Value) -> ScResult<()> {
    let ok = match data {
        Value::String(s) => !s.trim().is_empty(),
        Value::Object(map) => !map.is_empty(),
        _ => false,
    };
    if ok {
        Ok(())
    } else {
        Err(ScError::field_validation(
            "data",
            "required parameter is missing",
        ))
    }
}

impl ApiClient {
    /// List QR codes.
    pub async fn list_qr_codes(&self, query: &ListQuery) -> ScResult<serde_json::Value> {
        self.get_with("qr", query).await
    }

    /// Get a single QR code by id.
    pub async fn get_qr_code(&self, qr_id: i64) -> ScResult<serde_json::Value> {
        self.get(&format!("qr/{qr_id}")).await
    }

    /// Create a QR code.
    pub async fn create_qr_code(&self, params: &CreateQrParams) -> ScResult<serde_json::Value> {
        validate::ensure_required("type", &params.kind)?;
        validate::ensure_one_of("type", &params.kind, constants::qr_types::ALL)?;
        ensure_qr_data(&params.data)?;
        validate::ensure_rgb("background", params.background.as_deref())?;
        validate::ensure_rgb("foreground", params.foreground.as_deref())?;
        let body = serde_json::to_value(params)?;
        self.post("qr/add", &body).await
    }

    /// Update a QR code's content or appearance.
    pub async fn update_qr_code(
        &self,
        qr_id: i64,
        params: &UpdateQrParams,
    ) -> ScResult<serde_json::Value> {
        ensure_qr_data(&params.data)?;
        validate::ensure_rgb("background", params.background.as_deref())?;
        validate::ensure_rgb("foreground", params.foreground.as_deref())?;
        let body = serde_json::to_value(params)?;
        self.put(&format!("qr/{qr_id}/update"), &body).await
    }

    /// Delete a QR code.
    pub async fn delete_qr_code(&self, qr_id: i64) -> ScResult<serde_json::Value> {
        self.delete(&format!("qr/{qr_id}/delete")).await
    }
}
