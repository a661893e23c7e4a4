//! Directory response validation and decoding.

use crate::domain::error::{Result, RosterError};
use crate::domain::Employee;
use serde::Deserialize;

/// Top-level response body. Only `results` is read; `info` is suppressed by
/// the `noinfo` query flag.
#[derive(Debug, Deserialize)]
struct DirectoryResponse {
    results: Vec<Employee>,
}

/// Validates the status of a directory response and decodes its body.
///
/// # Errors
///
/// - [`RosterError::Http`] for any non-2xx status
/// - [`RosterError::Decode`] if a 2xx body is not directory JSON
///
/// # Examples
///
/// ```
/// use zroster::fetch::parse_response;
/// use zroster::RosterError;
///
/// let err = parse_response(404, b"").unwrap_err();
/// assert!(matches!(err, RosterError::Http { status: 404, .. }));
/// ```
pub fn parse_response(status: u16, body: &[u8]) -> Result<Vec<Employee>> {
    if !(200..300).contains(&status) {
        tracing::warn!(status, body_len = body.len(), "directory request failed");
        return Err(RosterError::Http {
            status,
            reason: reason_phrase(status).to_string(),
        });
    }

    let response: DirectoryResponse = serde_json::from_slice(body)?;
    tracing::debug!(employees = response.results.len(), "directory response decoded");
    Ok(response.results)
}

/// Canonical reason phrase for an HTTP status code.
#[must_use]
pub const fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        204 => "No Content",
        301 => "Moved Permanently",
        302 => "Found",
        304 => "Not Modified",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        408 => "Request Timeout",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => "Unknown Status",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{"results": [{
        "name": {"title": "Ms", "first": "anna", "last": "lee"},
        "location": {
            "street": {"number": 12, "name": "Oak St"},
            "city": "austin", "state": "texas", "country": "United States",
            "postcode": 73301
        },
        "email": "anna.lee@example.com",
        "dob": {"date": "1990-01-02T03:04:05.000Z", "age": 34},
        "cell": "(512) 555-0101",
        "picture": {"large": "https://randomuser.me/api/portraits/women/1.jpg"}
    }]}"#;

    #[test]
    fn success_returns_results_in_order() {
        let employees = parse_response(200, BODY.as_bytes()).unwrap();
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].display_name(), "Anna Lee");
    }

    #[test]
    fn not_found_carries_reason_phrase() {
        let err = parse_response(404, b"<html>nope</html>").unwrap_err();
        assert_eq!(err.to_string(), "HTTP error: 404 Not Found");
    }

    #[test]
    fn unknown_status_still_fails() {
        let err = parse_response(599, b"").unwrap_err();
        assert!(matches!(err, RosterError::Http { status: 599, ref reason } if reason == "Unknown Status"));
    }

    #[test]
    fn garbage_body_is_a_decode_error() {
        let err = parse_response(200, b"not json").unwrap_err();
        assert!(matches!(err, RosterError::Decode(_)));
    }
}
