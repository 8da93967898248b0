//! Typed payload models.
//!
//! Endpoint methods return the server's JSON verbatim; these structs are an
//! optional convenience for callers who want typed access to the documented
//! payload shapes. Unknown fields are ignored so schema additions on the
//! server side do not break deserialization.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A shortened link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub id: i64,
    /// The original long URL.
    pub url: String,
    /// The shortened URL.
    pub shorturl: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub custom: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub expiry: Option<String>,
    #[serde(default)]
    pub clicks: i64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A campaign grouping links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub total_links: i64,
    #[serde(default)]
    pub total_clicks: i64,
}

/// A channel grouping links and QR codes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub starred: bool,
    #[serde(default)]
    pub total_items: i64,
}

/// A branded domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Domain {
    pub id: i64,
    pub domain: String,
    #[serde(default)]
    pub redirectroot: Option<String>,
    #[serde(default)]
    pub redirect404: Option<String>,
}

/// A tracking pixel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pixel {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub tag: String,
}

/// A QR code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrCode {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    /// QR content: a plain string or a structured object depending on type.
    pub data: Value,
    /// URL of the rendered QR image.
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub foreground: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
}

/// A custom splash page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Splash {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub date: Option<String>,
}

/// A CTA overlay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Overlay {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

/// Paginated list payload returned by list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub current_page: i64,
    #[serde(default)]
    pub total_pages: i64,
}
