//! Channel endpoints.

use std::fmt;

use serde::Serialize;

use sc_core::error::ScResult;

use crate::client::ApiClient;
use crate::endpoints::ListQuery;
use crate::validate;

/// Kind of item that can be assigned to a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelItemType {
    Link,
    QrCode,
}

impl ChannelItemType {
    /// Path segment used by the assign endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelItemType::Link => "link",
            ChannelItemType::QrCode => "qr",
        }
    }
}

impl fmt::Display for ChannelItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for creating a channel.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateChannelParams {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Accent color as "rgb(r,g,b)".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub starred: bool,
}

/// Parameters for updating a channel. All fields optional.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateChannelParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starred: Option<bool>,
}

impl ApiClient {
    /// List channels.
    pub async fn list_channels(&self, query: &ListQuery) -> ScResult<serde_json::Value> {
        self.get_with("channels", query).await
    }

    /// List items (links and QR codes) in a channel.
    pub async fn list_channel_items(
        &self,
        channel_id: i64,
        query: &ListQuery,
    ) -> ScResult<serde_json::Value> {
        self.get_with(&format!("channel/{channel_id}"), query).await
    }

    /// Create a channel.
    pub async fn create_channel(
        &self,
        params: &CreateChannelParams,
    ) -> ScResult<serde_json::Value> {
        validate::ensure_required("name", &params.name)?;
        validate::ensure_rgb("color", params.color.as_deref())?;
        let body = serde_json::to_value(params)?;
        self.post("channel/add", &body).await
    }

    /// Assign a link or QR code to a channel.
    pub async fn assign_item_to_channel(
        &self,
        channel_id: i64,
        item_type: ChannelItemType,
        item_id: i64,
    ) -> ScResult<serde_json::Value> {
        self.post(
            &format!("channel/{channel_id}/assign/{item_type}/{item_id}"),
            &serde_json::json!({}),
        )
        .await
    }

    /// Update a channel.
    pub async fn update_channel(
        &self,
        channel_id: i64,
        params: &UpdateChannelParams,
    ) -> ScResult<serde_json::Value> {
        validate::ensure_rgb("color", params.color.as_deref())?;
        let body = serde_json::to_value(params)?;
        self.put(&format!("channel/{channel_id}/update"), &body)
            .await
    }

    /// Delete a channel.
    pub async fn delete_channel(&self, channel_id: i64) -> ScResult<serde_json::Value> {
        self.delete(&format!("channel/{channel_id}/delete")).await
    }
}
