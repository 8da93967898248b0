//! Error taxonomy for the Shotcut API client.
//!
//! Every failure an API call can produce is a variant of a single `ScError`
//! enum, so callers can discriminate programmatically (match on the variant)
//! or handle everything with one catch-all arm.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// Convenience type alias for Results using ScError.
pub type ScResult<T> = Result<T, ScError>;

/// Unified error type covering all failure modes of a Shotcut API call.
#[derive(Error, Debug)]
pub enum ScError {
    // -- Configuration errors --
    /// Failed to load or parse client configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// A required configuration value is missing.
    #[error("missing configuration: {0}")]
    MissingConfig(String),

    // -- Transport errors --
    /// The HTTP exchange could not complete (DNS, connection refused, TLS).
    #[error("network error: {0}")]
    Network(String),

    /// The request exceeded its deadline.
    #[error("request timeout: {0}")]
    Timeout(String),

    // -- API errors --
    /// The server rejected the API key (HTTP 401/403).
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The request data was invalid, either locally (missing required
    /// parameter) or remotely (HTTP 400/422 with field errors).
    #[error("validation error: {message}")]
    Validation {
        /// Human-readable summary.
        message: String,
        /// Per-field error messages.
        fields: BTreeMap<String, String>,
    },

    /// The API rate limit was exceeded (HTTP 429).
    #[error("rate limit exceeded (resets at {reset})")]
    RateLimit {
        /// When the current rate-limit window resets.
        reset: RateLimitReset,
    },

    /// The server returned any other error response, or a 2xx response
    /// whose body could not be interpreted.
    #[error("api error (status {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Best-effort message extracted from the response body.
        message: String,
    },

    // -- Local errors --
    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// File system operation failed (config loading).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapping anyhow errors for interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<serde_json::Error> for ScError {
    fn from(e: serde_json::Error) -> Self {
        ScError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for ScError {
    fn from(e: toml::de::Error) -> Self {
        ScError::Config(e.to_string())
    }
}

impl ScError {
    /// Build a validation error for a single field.
    pub fn field_validation(field: &str, problem: &str) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(field.to_string(), problem.to_string());
        ScError::Validation {
            message: format!("{field}: {problem}"),
            fields,
        }
    }

    /// Whether this error came from the transport layer rather than the API.
    pub fn is_transport(&self) -> bool {
        matches!(self, ScError::Network(_) | ScError::Timeout(_))
    }
}

/// When a rate-limited client may retry, as reported by the server.
///
/// The reset header is parsed best-effort; an absent or unparsable header
/// yields `Unknown` rather than a secondary error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitReset {
    /// Epoch seconds at which the rate-limit window resets.
    At(u64),
    /// The server did not report a usable reset time.
    Unknown,
}

impl RateLimitReset {
    /// Parse a reset header value (epoch seconds) into a reset time.
    pub fn parse(header: Option<&str>) -> Self {
        match header.and_then(|v| v.trim().parse::<u64>().ok()) {
            Some(epoch) => RateLimitReset::At(epoch),
            None => RateLimitReset::Unknown,
        }
    }
}

impl fmt::Display for RateLimitReset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateLimitReset::At(epoch) => write!(f, "{epoch}"),
            RateLimitReset::Unknown => write!(f, "unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_parse() {
        assert_eq!(
            RateLimitReset::parse(Some("1700000000")),
            RateLimitReset::At(1_700_000_000)
        );
        assert_eq!(RateLimitReset::parse(Some(" 42 ")), RateLimitReset::At(42));
        assert_eq!(RateLimitReset::parse(Some("soon")), RateLimitReset::Unknown);
        assert_eq!(RateLimitReset::parse(None), RateLimitReset::Unknown);
    }

    #[test]
    fn test_reset_display() {
        assert_eq!(RateLimitReset::At(1_700_000_000).to_string(), "1700000000");
        assert_eq!(RateLimitReset::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_field_validation() {
        let err = ScError::field_validation("url", "required parameter is missing");
        match &err {
            ScError::Validation { fields, .. } => {
                assert_eq!(fields["url"], "required parameter is missing");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "validation error: url: required parameter is missing"
        );
    }

    #[test]
    fn test_rate_limit_display() {
        let err = ScError::RateLimit {
            reset: RateLimitReset::Unknown,
        };
        assert_eq!(err.to_string(), "rate limit exceeded (resets at unknown)");
    }

    #[test]
    fn test_is_transport() {
        assert!(ScError::Timeout("deadline".into()).is_transport());
        assert!(ScError::Network("refused".into()).is_transport());
        assert!(!ScError::Api {
            status: 500,
            message: "oops".into()
        }
        .is_transport());
    }
}
