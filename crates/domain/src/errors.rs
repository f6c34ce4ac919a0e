//! Error types used throughout the client

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::QueryParams;

/// Distinct kinds of non-success responses returned by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorKind {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    UnprocessableEntity,
    TooManyRequests,
    ServerError,
    Unknown,
}

impl ApiErrorKind {
    /// Human-readable status description carried by the error.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::BadRequest => "Bad Request",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "Not Found",
            Self::Conflict => "Conflict",
            Self::UnprocessableEntity => "Unprocessable Entity",
            Self::TooManyRequests => "Too Many Requests",
            Self::ServerError => "Internal Server Error",
            Self::Unknown => "Unknown Error",
        }
    }

    /// Stable label suitable for structured logging.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BadRequest => "bad_request",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::UnprocessableEntity => "unprocessable_entity",
            Self::TooManyRequests => "too_many_requests",
            Self::ServerError => "server_error",
            Self::Unknown => "unknown",
        }
    }
}

/// A non-success HTTP response, with everything needed to diagnose it
///
/// `body` is the decoded response body: parsed JSON when possible, the raw
/// text as a JSON string otherwise, `null` when the body was empty.
/// `params` are the outgoing query parameters with the API key redacted.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("{description} (status={status}, response={body}, params={params})")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub status: u16,
    pub description: String,
    pub body: serde_json::Value,
    pub params: QueryParams,
}

impl ApiError {
    /// Build an error whose description is the kind's canonical description.
    #[must_use]
    pub fn new(
        kind: ApiErrorKind,
        status: u16,
        body: serde_json::Value,
        params: QueryParams,
    ) -> Self {
        Self { kind, status, description: kind.description().to_string(), body, params }
    }
}

/// Main error type for the client
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum OlaMapsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Api(Box<ApiError>),
}

impl OlaMapsError {
    /// The API error carried by this error, if the server answered with a
    /// non-success status.
    #[must_use]
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Convenience accessor for the API error kind.
    #[must_use]
    pub fn api_kind(&self) -> Option<ApiErrorKind> {
        self.api_error().map(|err| err.kind)
    }

    /// Stable label suitable for structured logging.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Auth(_) => "auth",
            Self::Network(_) => "network",
            Self::Decode(_) => "decode",
            Self::InvalidInput(_) => "invalid_input",
            Self::Api(err) => err.kind.label(),
        }
    }
}

impl From<ApiError> for OlaMapsError {
    fn from(err: ApiError) -> Self {
        Self::Api(Box::new(err))
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, OlaMapsError>;

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn api_error_display_includes_body_and_params() {
        let params = QueryParams::new().with("address", "Koramangala");
        let err = ApiError::new(ApiErrorKind::NotFound, 404, json!({"error": "nope"}), params);

        let rendered = err.to_string();
        assert!(rendered.starts_with("Not Found"));
        assert!(rendered.contains("status=404"));
        assert!(rendered.contains(r#"{"error":"nope"}"#));
        assert!(rendered.contains("address=Koramangala"));
    }

    #[test]
    fn api_variant_is_transparent() {
        let err: OlaMapsError =
            ApiError::new(ApiErrorKind::Conflict, 409, serde_json::Value::Null, QueryParams::new())
                .into();

        assert_eq!(err.api_kind(), Some(ApiErrorKind::Conflict));
        assert!(err.to_string().starts_with("Conflict"));
        assert_eq!(err.label(), "conflict");
    }

    #[test]
    fn non_api_errors_have_no_kind() {
        let err = OlaMapsError::Config("missing credentials".into());
        assert!(err.api_error().is_none());
        assert_eq!(err.label(), "config");
    }
}
