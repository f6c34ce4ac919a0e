//! Response status classification
//!
//! Maps non-success HTTP statuses to [`ApiErrorKind`] and decodes error
//! bodies so they can be attached to the resulting [`ApiError`].

use olamaps_domain::{ApiError, ApiErrorKind, QueryParams};
use serde_json::Value;

/// Exact-status entries; anything `>= 500` not listed here is a server error.
const STATUS_TABLE: &[(u16, ApiErrorKind)] = &[
    (400, ApiErrorKind::BadRequest),
    (401, ApiErrorKind::Unauthorized),
    (403, ApiErrorKind::Forbidden),
    (404, ApiErrorKind::NotFound),
    (409, ApiErrorKind::Conflict),
    (422, ApiErrorKind::UnprocessableEntity),
    (429, ApiErrorKind::TooManyRequests),
];

/// Classify a non-success status.
#[must_use]
pub fn classify_status(status: u16) -> ApiErrorKind {
    STATUS_TABLE
        .iter()
        .find(|(code, _)| *code == status)
        .map(|(_, kind)| *kind)
        .unwrap_or(if status >= 500 { ApiErrorKind::ServerError } else { ApiErrorKind::Unknown })
}

/// Decode an error body: JSON when it parses, the text as a JSON string
/// otherwise, `null` when empty.
#[must_use]
pub fn decode_error_body(body: &[u8]) -> Value {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }

    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}

/// Build the error for a non-success response.
///
/// `params` should already have the API key redacted.
#[must_use]
pub fn api_error_from_response(status: u16, body: &[u8], params: QueryParams) -> ApiError {
    ApiError::new(classify_status(status), status, decode_error_body(body), params)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_status_table() {
        let cases = [
            (400, ApiErrorKind::BadRequest),
            (401, ApiErrorKind::Unauthorized),
            (403, ApiErrorKind::Forbidden),
            (404, ApiErrorKind::NotFound),
            (409, ApiErrorKind::Conflict),
            (422, ApiErrorKind::UnprocessableEntity),
            (429, ApiErrorKind::TooManyRequests),
            (500, ApiErrorKind::ServerError),
            (502, ApiErrorKind::ServerError),
            (599, ApiErrorKind::ServerError),
            (402, ApiErrorKind::Unknown),
            (418, ApiErrorKind::Unknown),
            (302, ApiErrorKind::Unknown),
        ];

        for (status, expected) in cases {
            assert_eq!(classify_status(status), expected, "status {status}");
        }
    }

    #[test]
    fn test_decode_error_body() {
        assert_eq!(decode_error_body(br#"{"error":"bad"}"#), json!({"error": "bad"}));
        assert_eq!(decode_error_body(b"upstream timeout"), json!("upstream timeout"));
        assert_eq!(decode_error_body(b""), Value::Null);
        assert_eq!(decode_error_body(b"  \n"), Value::Null);
    }

    #[test]
    fn test_api_error_from_response() {
        let params = QueryParams::new().with("latlng", "12.9,77.6");
        let err = api_error_from_response(429, br#"{"message":"slow down"}"#, params.clone());

        assert_eq!(err.kind, ApiErrorKind::TooManyRequests);
        assert_eq!(err.description, "Too Many Requests");
        assert_eq!(err.params, params);
        assert_eq!(err.body["message"], "slow down");
    }
}
