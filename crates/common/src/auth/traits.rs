//! Traits for the token exchange
//!
//! Abstracts the token endpoint so the token manager can be tested with
//! mock implementations.

use async_trait::async_trait;

use super::client::OAuthClientError;
use super::types::TokenResponse;

/// One client-credentials exchange against a token endpoint
#[async_trait]
pub trait TokenExchange: Send + Sync {
    /// Request a fresh token.
    ///
    /// # Errors
    /// Returns error on transport failure, a non-success status, or an
    /// undecodable response body.
    async fn exchange(&self) -> Result<TokenResponse, OAuthClientError>;
}
