//! Response interpretation.
//!
//! Turns a raw HTTP response into exactly one typed outcome: the decoded
//! JSON payload on success, or one `ScError` variant chosen from the status
//! code and the error envelope in the body. No response is ever swallowed
//! and no call yields both a payload and an error.

use std::collections::BTreeMap;

use reqwest::Response;
use serde_json::Value;

use sc_core::constants;
use sc_core::error::{RateLimitReset, ScError, ScResult};

/// Interpret a raw response into a JSON payload or a typed error.
pub(crate) async fn interpret(response: Response) -> ScResult<Value> {
    let status = response.status().as_u16();
    let reset_header = response
        .headers()
        .get(constants::RATE_LIMIT_RESET_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = response
        .text()
        .await
        .map_err(|e| ScError::Network(format!("failed to read response body: {e}")))?;

    classify(status, reset_header.as_deref(), &body)
}

/// Classify a status code, rate-limit header, and body text into an outcome.
///
/// Split out from [`interpret`] so the full decision table is testable
/// without a live HTTP exchange.
pub fn classify(status: u16, reset_header: Option<&str>, body: &str) -> ScResult<Value> {
    if (200..300).contains(&status) {
        return classify_success(status, body);
    }

    let parsed: Option<Value> = serde_json::from_str(body).ok();
    match status {
        401 | 403 => Err(ScError::Auth(
            parsed
                .as_ref()
                .and_then(extract_message)
                .unwrap_or_else(|| "invalid or missing API key".to_string()),
        )),
        429 => Err(ScError::RateLimit {
            reset: RateLimitReset::parse(reset_header),
        }),
        422 => Err(ScError::Validation {
            message: parsed
                .as_ref()
                .and_then(extract_message)
                .unwrap_or_else(|| "request data is invalid".to_string()),
            fields: parsed.as_ref().and_then(field_errors).unwrap_or_default(),
        }),
        400 => match parsed.as_ref().and_then(field_errors) {
            Some(fields) => Err(ScError::Validation {
                message: parsed
                    .as_ref()
                    .and_then(extract_message)
                    .unwrap_or_else(|| "request data is invalid".to_string()),
                fields,
            }),
            None => Err(generic_api(status, parsed.as_ref(), body)),
        },
        _ => Err(generic_api(status, parsed.as_ref(), body)),
    }
}

/// Success path: parse the body, honoring the Shotcut response envelope.
fn classify_success(status: u16, body: &str) -> ScResult<Value> {
    // An empty 2xx body is an empty payload, not an error.
    if body.trim().is_empty() {
        return Ok(Value::Object(serde_json::Map::new()));
    }

    let value: Value = serde_json::from_str(body).map_err(|_| ScError::Api {
        status,
        message: "malformed response body".to_string(),
    })?;

    // Shotcut reports some failures inside a 2xx envelope: {"error": 1, ...}
    if let Some(code) = envelope_error_code(&value) {
        if code != 0 {
            let message = value
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("unknown API error")
                .to_string();
            return Err(ScError::Api { status, message });
        }
    }

    Ok(value)
}

/// Read the envelope `error` field, tolerating numeric strings.
fn envelope_error_code(value: &Value) -> Option<i64> {
    match value.get("error")? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Best-effort error message from a parsed error body.
fn extract_message(value: &Value) -> Option<String> {
    value
        .get("message")
        .and_then(Value::as_str)
        .or_else(|| value.get("error").and_then(Value::as_str))
        .map(str::to_string)
}

/// Extract a field→message mapping from a validation-shaped error body.
///
/// Recognizes an `errors` object whose values are strings or arrays of
/// strings (first entry wins).
fn field_errors(value: &Value) -> Option<BTreeMap<String, String>> {
    let errors = value.get("errors")?.as_object()?;
    let mut fields = BTreeMap::new();
    for (field, detail) in errors {
        let message = match detail {
            Value::String(s) => s.clone(),
            Value::Array(items) => items.first()?.as_str()?.to_string(),
            other => other.to_string(),
        };
        fields.insert(field.clone(), message);
    }
    if fields.is_empty() {
        None
    } else {
        Some(fields)
    }
}

/// Generic API error with a best-effort message.
fn generic_api(status: u16, parsed: Option<&Value>, body: &str) -> ScError {
    let message = parsed
        .and_then(extract_message)
        .unwrap_or_else(|| truncate_preview(body));
    ScError::Api { status, message }
}

/// Truncate a raw (non-JSON) body to a readable preview.
fn truncate_preview(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "no response body".to_string();
    }
    let mut preview: String = trimmed
        .chars()
        .take(constants::ERROR_BODY_PREVIEW_LIMIT)
        .collect();
    if trimmed.chars().count() > constants::ERROR_BODY_PREVIEW_LIMIT {
        preview.push('…');
    }
    preview
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_passthrough() {
        let value = classify(200, None, r#"{"shorturl":"https://sho.rt/x"}"#).unwrap();
        assert_eq!(value["shorturl"], "https://sho.rt/x");
    }

    #[test]
    fn test_success_empty_body_is_empty_map() {
        let value = classify(204, None, "").unwrap();
        assert_eq!(value, serde_json::json!({}));
    }

    #[test]
    fn test_success_malformed_body() {
        let err = classify(200, None, "<html>oops</html>").unwrap_err();
        match err {
            ScError::Api { status, message } => {
                assert_eq!(status, 200);
                assert_eq!(message, "malformed response body");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_envelope_error_on_2xx() {
        let err = classify(200, None, r#"{"error":1,"message":"Invalid URL"}"#).unwrap_err();
        match err {
            ScError::Api { message, .. } => assert_eq!(message, "Invalid URL"),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_envelope_error_zero_is_success() {
        let value = classify(200, None, r#"{"error":0,"data":{"id":7}}"#).unwrap();
        assert_eq!(value["data"]["id"], 7);
    }

    #[test]
    fn test_auth_errors() {
        for status in [401, 403] {
            let err = classify(status, None, r#"{"message":"Bad key"}"#).unwrap_err();
            match err {
                ScError::Auth(message) => assert_eq!(message, "Bad key"),
                other => panic!("unexpected variant for {status}: {other:?}"),
            }
        }
    }

    #[test]
    fn test_auth_error_default_message() {
        let err = classify(401, None, "").unwrap_err();
        match err {
            ScError::Auth(message) => assert_eq!(message, "invalid or missing API key"),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_rate_limit_with_reset() {
        let err = classify(429, Some("1700000000"), "").unwrap_err();
        match err {
            ScError::RateLimit { reset } => assert_eq!(reset, RateLimitReset::At(1_700_000_000)),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_rate_limit_without_reset() {
        let err = classify(429, None, "").unwrap_err();
        match err {
            ScError::RateLimit { reset } => assert_eq!(reset, RateLimitReset::Unknown),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_validation_422() {
        let body = r#"{"message":"The given data was invalid","errors":{"url":["The url field is required."]}}"#;
        let err = classify(422, None, body).unwrap_err();
        match err {
            ScError::Validation { fields, .. } => {
                assert_eq!(fields["url"], "The url field is required.");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_validation_400_with_field_errors() {
        let body = r#"{"errors":{"domain":"already taken"}}"#;
        let err = classify(400, None, body).unwrap_err();
        assert!(matches!(err, ScError::Validation { .. }));
    }

    #[test]
    fn test_400_without_field_errors_is_generic() {
        let err = classify(400, None, r#"{"message":"bad request"}"#).unwrap_err();
        match err {
            ScError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "bad request");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_500_generic_with_raw_preview() {
        let err = classify(500, None, "Internal Server Error").unwrap_err();
        match err {
            ScError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Internal Server Error");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_long_raw_body_truncated() {
        let body = "x".repeat(1000);
        let err = classify(502, None, &body).unwrap_err();
        match err {
            ScError::Api { message, .. } => {
                assert!(message.chars().count() <= constants::ERROR_BODY_PREVIEW_LIMIT + 1);
                assert!(message.ends_with('…'));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
