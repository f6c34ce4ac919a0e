//! OAuth 2.0 token types

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Token endpoint response (RFC 6749 §5.1)
///
/// Every field is optional so a malformed response still decodes; the token
/// manager decides what a missing `access_token` means.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub token_type: Option<String>,
    /// Token lifetime in seconds
    pub expires_in: Option<i64>,
    pub scope: Option<String>,
}

/// A cached bearer token
///
/// Replaced wholesale on refresh, never mutated in place. A token without
/// `expires_at` is never considered valid for reuse.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSet {
    pub access_token: String,
    pub token_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

impl TokenSet {
    /// Build a token from an exchange response received at `now`.
    ///
    /// Returns `None` when the response carries no access token. A lifetime
    /// that cannot be represented as a timestamp is recorded as no expiry.
    #[must_use]
    pub fn from_response(response: TokenResponse, now: DateTime<Utc>) -> Option<Self> {
        let access_token = response.access_token.filter(|token| !token.is_empty())?;
        let expires_at = response
            .expires_in
            .and_then(Duration::try_seconds)
            .and_then(|lifetime| now.checked_add_signed(lifetime));

        Some(Self {
            access_token,
            token_type: response.token_type.unwrap_or_else(|| "Bearer".to_string()),
            expires_at,
            scope: response.scope,
        })
    }

    /// `true` while `now` is strictly before the recorded expiry.
    #[must_use]
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| now < expires_at)
    }
}

impl fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSet")
            .field("access_token", &"***")
            .field("token_type", &self.token_type)
            .field("expires_at", &self.expires_at)
            .field("scope", &self.scope)
            .finish()
    }
}
