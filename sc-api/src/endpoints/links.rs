//! Link (short URL) endpoints.

use serde::Serialize;

use sc_core::constants;
use sc_core::error::ScResult;

use crate::client::ApiClient;
use crate::validate;

/// Query parameters for listing links.
#[derive(Debug, Clone, Serialize)]
pub struct ListLinksQuery {
    /// Maximum number of results per page.
    pub limit: u32,
    /// Page number, starting at 1.
    pub page: u32,
    /// Sort order: "date" or "click".
    pub order: String,
    /// Filter by short URL slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short: Option<String>,
}

impl Default for ListLinksQuery {
    fn default() -> Self {
        Self {
            limit: constants::DEFAULT_PAGE_LIMIT,
            page: constants::DEFAULT_PAGE,
            order: constants::DEFAULT_LINK_ORDER.to_string(),
            short: None,
        }
    }
}

/// Parameters for shortening a link. `url` is required; everything else is
/// sent only when set.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ShortenLinkParams {
    /// The long URL to shorten.
    pub url: String,
    /// Custom slug for the short URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<String>,
    /// Redirection type: "direct", "frame", or "splash".
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Password protecting the link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Branded domain to shorten under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Expiry datetime, "YYYY-MM-DD HH:MM:SS".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ShortenLinkParams {
    /// Shorten the given URL with default options.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

/// Parameters for updating an existing link. All fields optional.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateLinkParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ApiClient {
    /// List links with pagination, ordering, and optional slug filter.
    pub async fn list_links(&self, query: &ListLinksQuery) -> ScResult<serde_json::Value> {
        self.get_with("urls", query).await
    }

    /// Get a single link by id.
    pub async fn get_link(&self, link_id: i64) -> ScResult<serde_json::Value> {
        self.get(&format!("url/{link_id}")).await
    }

    /// Shorten a link. Fails locally with a validation error before any
    /// network call if `url` is empty.
    pub async fn shorten_link(&self, params: &ShortenLinkParams) -> ScResult<serde_json::Value> {
        validate::ensure_required("url", &params.url)?;
        if let Some(kind) = params.kind.as_deref() {
            validate::ensure_one_of("type", kind, constants::link_types::ALL)?;
        }
        validate::ensure_datetime("expiry", params.expiry.as_deref())?;

        let body = serde_json::to_value(params)?;
        self.post("url/add", &body).await
    }

    /// Update an existing link.
    pub async fn update_link(
        &self,
        link_id: i64,
        params: &UpdateLinkParams,
    ) -> ScResult<serde_json::Value> {
        if let Some(kind) = params.kind.as_deref() {
            validate::ensure_one_of("type", kind, constants::link_types::ALL)?;
        }
        validate::ensure_datetime("expiry", params.expiry.as_deref())?;

        let body = serde_json::to_value(params)?;
        self.put(&format!("url/{link_id}/update"), &body).await
    }

    /// Delete a link.
    pub async fn delete_link(&self, link_id: i64) -> ScResult<serde_json::Value> {
        self.delete(&format!("url/{link_id}/delete")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_links_query_default() {
        let q = ListLinksQuery::default();
        assert_eq!(q.limit, 10);
        assert_eq!(q.order, "date");
        let json = serde_json::to_value(&q).unwrap();
        assert!(json.get("short").is_none());
    }

    #[test]
    fn test_shorten_params_type_rename() {
        let params = ShortenLinkParams {
            kind: Some("direct".into()),
            ..ShortenLinkParams::new("https://example.com")
        };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["type"], "direct");
        assert_eq!(json["url"], "https://example.com");
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_update_params_all_optional() {
        let json = serde_json::to_value(UpdateLinkParams::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }
}
