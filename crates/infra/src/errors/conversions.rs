//! Conversions from external infrastructure errors into domain errors.

use olamaps_common::auth::{OAuthClientError, TokenManagerError};
use olamaps_domain::OlaMapsError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub OlaMapsError);

impl From<InfraError> for OlaMapsError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<OlaMapsError> for InfraError {
    fn from(value: OlaMapsError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoOlaMapsError {
    fn into_olamaps(self) -> OlaMapsError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → OlaMapsError */
/* -------------------------------------------------------------------------- */

impl IntoOlaMapsError for HttpError {
    fn into_olamaps(self) -> OlaMapsError {
        if self.is_timeout() {
            return OlaMapsError::Network("HTTP request timed out".into());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return OlaMapsError::Network("HTTP connection failure".into());
        }

        if self.is_builder() {
            return OlaMapsError::Config(format!("invalid HTTP request: {self}"));
        }

        if self.is_decode() {
            return OlaMapsError::Decode(format!("HTTP body could not be decoded: {self}"));
        }

        OlaMapsError::Network(format!("HTTP error: {self}"))
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_olamaps())
    }
}

/* -------------------------------------------------------------------------- */
/* TokenManagerError → OlaMapsError */
/* -------------------------------------------------------------------------- */

impl IntoOlaMapsError for TokenManagerError {
    fn into_olamaps(self) -> OlaMapsError {
        match self {
            TokenManagerError::Exchange(OAuthClientError::RequestFailed(err)) => {
                match err.into_olamaps() {
                    OlaMapsError::Network(msg) => {
                        OlaMapsError::Auth(format!("token exchange failed: {msg}"))
                    }
                    other => other,
                }
            }
            TokenManagerError::Exchange(OAuthClientError::Rejected { status, body }) => {
                OlaMapsError::Auth(format!("token endpoint returned status {status}: {body}"))
            }
            TokenManagerError::Exchange(OAuthClientError::ParseError(msg)) => {
                OlaMapsError::Auth(format!("token response could not be parsed: {msg}"))
            }
            TokenManagerError::MissingAccessToken => {
                OlaMapsError::Auth("token response did not contain an access_token".into())
            }
        }
    }
}

impl From<TokenManagerError> for InfraError {
    fn from(value: TokenManagerError) -> Self {
        InfraError(value.into_olamaps())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → OlaMapsError */
/* -------------------------------------------------------------------------- */

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(OlaMapsError::Decode(format!("response is not valid JSON: {value}")))
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
