//! OAuth 2.0 client-credentials client
//!
//! Posts `grant_type=client_credentials` with the client ID, secret and
//! `openid` scope as a form body to the token endpoint.

use std::fmt;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::traits::TokenExchange;
use super::types::TokenResponse;

/// Grant type sent with every exchange
pub const GRANT_TYPE: &str = "client_credentials";
/// Scope requested with every exchange
pub const SCOPE: &str = "openid";

/// Error type for token endpoint operations
#[derive(Debug)]
pub enum OAuthClientError {
    /// HTTP request failed before a response was received
    RequestFailed(reqwest::Error),

    /// Token endpoint answered with a non-success status
    Rejected { status: u16, body: String },

    /// Failed to parse response
    ParseError(String),
}

impl fmt::Display for OAuthClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequestFailed(e) => write!(f, "HTTP request failed: {e}"),
            Self::Rejected { status, body } => {
                write!(f, "Token endpoint returned status {status}: {body}")
            }
            Self::ParseError(msg) => write!(f, "Parse error: {msg}"),
        }
    }
}

impl std::error::Error for OAuthClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::RequestFailed(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for OAuthClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::RequestFailed(err)
    }
}

/// Client for the client-credentials grant
#[derive(Clone)]
pub struct ClientCredentialsClient {
    token_url: String,
    client_id: String,
    client_secret: String,
    http: Client,
}

impl ClientCredentialsClient {
    /// Create a client posting to `token_url` with the given credentials.
    ///
    /// The `http` client is reused for every exchange; share it with the rest
    /// of the application to pool connections.
    pub fn new(
        token_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        http: Client,
    ) -> Self {
        Self {
            token_url: token_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            http,
        }
    }

    #[must_use]
    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Perform one exchange.
    ///
    /// # Errors
    /// Returns error if the request fails, the endpoint answers with a
    /// non-success status, or the body is not a JSON token response.
    pub async fn request_token(&self) -> Result<TokenResponse, OAuthClientError> {
        let form = [
            ("grant_type", GRANT_TYPE),
            ("scope", SCOPE),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
        ];

        debug!(token_url = %self.token_url, client_id = %self.client_id, "Requesting access token");

        let response = self.http.post(&self.token_url).form(&form).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OAuthClientError::Rejected { status: status.as_u16(), body });
        }

        response.json().await.map_err(|e| OAuthClientError::ParseError(e.to_string()))
    }
}

impl fmt::Debug for ClientCredentialsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentialsClient")
            .field("token_url", &self.token_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl TokenExchange for ClientCredentialsClient {
    async fn exchange(&self) -> Result<TokenResponse, OAuthClientError> {
        self.request_token().await
    }
}
