//! Local parameter validation.
//!
//! Checks that would otherwise surface as ambiguous remote failures are done
//! before any network round-trip, using the same `Validation` error kind the
//! interpreter produces for remote field errors.

use sc_core::error::{ScError, ScResult};

/// Require a non-empty string value for a field.
pub fn ensure_required(field: &str, value: &str) -> ScResult<()> {
    if value.trim().is_empty() {
        return Err(ScError::field_validation(field, "required parameter is missing"));
    }
    Ok(())
}

/// Validate an optional `rgb(r,g,b)` color with 0-255 components.
pub fn ensure_rgb(field: &str, value: Option<&str>) -> ScResult<()> {
    let Some(color) = value else { return Ok(()) };
    if is_rgb_color(color) {
        Ok(())
    } else {
        Err(ScError::field_validation(
            field,
            "expected an rgb(r,g,b) color with components 0-255",
        ))
    }
}

/// Validate an optional `YYYY-MM-DD HH:MM:SS` datetime string.
pub fn ensure_datetime(field: &str, value: Option<&str>) -> ScResult<()> {
    let Some(datetime) = value else { return Ok(()) };
    match chrono::NaiveDateTime::parse_from_str(datetime, "%Y-%m-%d %H:%M:%S") {
        Ok(_) => Ok(()),
        Err(_) => Err(ScError::field_validation(
            field,
            "expected format YYYY-MM-DD HH:MM:SS",
        )),
    }
}

/// Require a value to be one of a known set.
pub fn ensure_one_of(field: &str, value: &str, allowed: &[&str]) -> ScResult<()> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(ScError::field_validation(
            field,
            &format!("must be one of: {}", allowed.join(", ")),
        ))
    }
}

fn is_rgb_color(color: &str) -> bool {
    let Some(inner) = color
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    else {
        return false;
    };
    let components: Vec<&str> = inner.split(',').collect();
    if components.len() != 3 {
        return false;
    }
    components
        .iter()
        .all(|c| c.trim().parse::<u16>().map(|v| v <= 255).unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert!(ensure_required("url", "https://example.com").is_ok());
        assert!(ensure_required("url", "").is_err());
        assert!(ensure_required("url", "   ").is_err());
    }

    #[test]
    fn test_rgb_color() {
        assert!(ensure_rgb("color", None).is_ok());
        assert!(ensure_rgb("color", Some("rgb(255, 0, 16)")).is_ok());
        assert!(ensure_rgb("color", Some("rgb(0,0,0)")).is_ok());
        assert!(ensure_rgb("color", Some("rgb(256,0,0)")).is_err());
        assert!(ensure_rgb("color", Some("rgb(1,2)")).is_err());
        assert!(ensure_rgb("color", Some("#ff0010")).is_err());
        assert!(ensure_rgb("color", Some("rgb(a,b,c)")).is_err());
    }

    #[test]
    fn test_datetime() {
        assert!(ensure_datetime("expiry", None).is_ok());
        assert!(ensure_datetime("expiry", Some("2026-12-31 23:59:59")).is_ok());
        assert!(ensure_datetime("expiry", Some("2026-12-31")).is_err());
        assert!(ensure_datetime("expiry", Some("31/12/2026 23:59")).is_err());
    }

    #[test]
    fn test_one_of() {
        assert!(ensure_one_of("type", "facebook", &["facebook", "twitter"]).is_ok());
        let err = ensure_one_of("type", "myspace", &["facebook", "twitter"]).unwrap_err();
        match err {
            sc_core::ScError::Validation { fields, .. } => {
                assert!(fields["type"].contains("facebook"));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
