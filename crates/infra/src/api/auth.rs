//! Request authentication
//!
//! Either an API key in the query string or a bearer token in the
//! `Authorization` header, never both.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use olamaps_common::auth::{TokenExchange, TokenManager};
use olamaps_domain::constants::API_KEY_PARAM;
use olamaps_domain::{OlaMapsError, QueryParams};
use reqwest::RequestBuilder;
use tracing::debug;

use crate::errors::InfraError;

/// Trait for providing access tokens
///
/// This trait allows dependency injection and testing with mock providers.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Get a valid access token
    ///
    /// This method should handle token refresh if needed.
    async fn access_token(&self) -> Result<String, OlaMapsError>;

    /// Forget the current token, e.g. after the API rejected it.
    async fn invalidate(&self) {}
}

#[async_trait]
impl<C: TokenExchange + 'static> AccessTokenProvider for TokenManager<C> {
    async fn access_token(&self) -> Result<String, OlaMapsError> {
        self.get_token().await.map_err(|e| InfraError::from(e).into())
    }

    async fn invalidate(&self) {
        TokenManager::invalidate(self).await;
    }
}

/// How outgoing requests are authenticated
#[derive(Clone)]
pub enum Authenticator {
    /// Static key sent as the `api_key` query parameter
    ApiKey(String),
    /// Bearer token from a provider, sent in the `Authorization` header
    Bearer(Arc<dyn AccessTokenProvider>),
}

impl Authenticator {
    #[must_use]
    pub fn is_api_key(&self) -> bool {
        matches!(self, Self::ApiKey(_))
    }

    /// Add the API key to `params` when in API-key mode.
    pub fn apply_to_params(&self, params: &mut QueryParams) {
        if let Self::ApiKey(key) = self {
            params.insert(API_KEY_PARAM, key);
        }
    }

    /// Add the bearer header when in token mode.
    ///
    /// # Errors
    /// Propagates token acquisition failures.
    pub async fn apply_to_request(
        &self,
        request: RequestBuilder,
    ) -> Result<RequestBuilder, OlaMapsError> {
        match self {
            Self::ApiKey(_) => Ok(request),
            Self::Bearer(provider) => {
                let token = provider.access_token().await?;
                Ok(request.bearer_auth(token))
            }
        }
    }

    /// Called after the API answered 401.
    pub async fn on_unauthorized(&self) {
        if let Self::Bearer(provider) = self {
            debug!("API rejected bearer token; invalidating cache");
            provider.invalidate().await;
        }
    }
}

impl fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiKey(_) => f.write_str("Authenticator::ApiKey(***)"),
            Self::Bearer(_) => f.write_str("Authenticator::Bearer"),
        }
    }
}
