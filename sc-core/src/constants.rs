//! Client-wide constants.

/// Library name reported in the User-Agent header.
pub const CLIENT_NAME: &str = "shotcut-rs";

/// Library version.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Documented root of the Shotcut REST API.
pub const DEFAULT_BASE_URL: &str = "https://shotcut.in/api";

/// Default per-request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Connection establishment timeout in seconds.
pub const CONNECT_TIMEOUT_SECS: u64 = 15;

/// Response header carrying the rate-limit reset time (epoch seconds).
pub const RATE_LIMIT_RESET_HEADER: &str = "X-RateLimit-Reset";

/// Maximum characters of a non-JSON error body kept in an error message.
pub const ERROR_BODY_PREVIEW_LIMIT: usize = 200;

/// Default number of items per page on list endpoints.
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

/// Default page number on list endpoints.
pub const DEFAULT_PAGE: u32 = 1;

/// Default sort order when listing links.
pub const DEFAULT_LINK_ORDER: &str = "date";

/// Link redirection type values accepted by the link endpoints.
pub mod link_types {
    pub const DIRECT: &str = "direct";
    pub const FRAME: &str = "frame";
    pub const SPLASH: &str = "splash";

    /// All valid link types.
    pub const ALL: &[&str] = &[DIRECT, FRAME, SPLASH];
}

/// Tracking pixel provider values accepted by the pixel endpoints.
pub mod pixel_types {
    pub const FACEBOOK: &str = "facebook";
    pub const TWITTER: &str = "twitter";
    pub const LINKEDIN: &str = "linkedin";
    pub const QUORA: &str = "quora";
    pub const PINTEREST: &str = "pinterest";
    pub const ADWORDS: &str = "adwords";
    pub const BING: &str = "bing";
    pub const GOOGLE_TAG_MANAGER: &str = "gtmanager";

    /// All valid pixel types.
    pub const ALL: &[&str] = &[
        FACEBOOK,
        TWITTER,
        LINKEDIN,
        QUORA,
        PINTEREST,
        ADWORDS,
        BING,
        GOOGLE_TAG_MANAGER,
    ];
}

/// QR code content type values accepted by the QR endpoints.
pub mod qr_types {
    pub const LINK: &str = "link";
    pub const TEXT: &str = "text";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const SMS: &str = "sms";
    pub const VCARD: &str = "vcard";
    pub const WIFI: &str = "wifi";

    /// All valid QR code types.
    pub const ALL: &[&str] = &[LINK, TEXT, EMAIL, PHONE, SMS, VCARD, WIFI];
}
