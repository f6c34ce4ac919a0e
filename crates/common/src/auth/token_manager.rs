//! Bearer token cache
//!
//! Manages the token lifecycle:
//! - Lazy acquisition on first use
//! - Reuse while the cached token has not expired
//! - One exchange per expiry, even with concurrent callers

use std::fmt;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::client::OAuthClientError;
use super::traits::TokenExchange;
use super::types::TokenSet;
use crate::time::{Clock, SystemClock};

/// Error type for token manager operations
#[derive(Debug)]
pub enum TokenManagerError {
    /// The exchange itself failed
    Exchange(OAuthClientError),

    /// The exchange succeeded but the response carried no access token
    MissingAccessToken,
}

impl fmt::Display for TokenManagerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exchange(e) => write!(f, "Token exchange failed: {e}"),
            Self::MissingAccessToken => write!(f, "Token response did not contain an access_token"),
        }
    }
}

impl std::error::Error for TokenManagerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Exchange(e) => Some(e),
            Self::MissingAccessToken => None,
        }
    }
}

impl From<OAuthClientError> for TokenManagerError {
    fn from(err: OAuthClientError) -> Self {
        Self::Exchange(err)
    }
}

/// Caches the current bearer token and refreshes it on expiry
///
/// The cache sits behind an async mutex that is held across the exchange,
/// so callers arriving while a refresh is in flight wait for it and then
/// reuse its result instead of starting their own.
pub struct TokenManager<C: TokenExchange> {
    exchange: C,
    current: Mutex<Option<TokenSet>>,
    clock: Arc<dyn Clock>,
}

impl<C: TokenExchange> TokenManager<C> {
    /// Create a token manager using the system clock. No exchange happens
    /// until the first [`get_token`](Self::get_token).
    pub fn new(exchange: C) -> Self {
        Self::with_clock(exchange, Arc::new(SystemClock))
    }

    pub fn with_clock(exchange: C, clock: Arc<dyn Clock>) -> Self {
        Self { exchange, current: Mutex::new(None), clock }
    }

    /// Return a valid access token, exchanging credentials if needed.
    ///
    /// A cached token is returned unchanged while its expiry is strictly in
    /// the future. Otherwise exactly one exchange is performed and its
    /// result replaces the cache.
    ///
    /// # Errors
    /// Returns error if the exchange fails or its response has no token. The
    /// previous cache entry is left untouched in that case.
    pub async fn get_token(&self) -> Result<String, TokenManagerError> {
        let mut current = self.current.lock().await;

        if let Some(token) = current.as_ref() {
            if token.is_valid_at(self.clock.now()) {
                return Ok(token.access_token.clone());
            }
            debug!("Cached access token expired");
        }

        let token = self.exchange_locked().await?;
        let access_token = token.access_token.clone();
        *current = Some(token);
        Ok(access_token)
    }

    /// Force an exchange regardless of the cached token's expiry.
    ///
    /// # Errors
    /// Same as [`get_token`](Self::get_token).
    pub async fn refresh(&self) -> Result<String, TokenManagerError> {
        let mut current = self.current.lock().await;
        let token = self.exchange_locked().await?;
        let access_token = token.access_token.clone();
        *current = Some(token);
        Ok(access_token)
    }

    /// Drop the cached token so the next call exchanges again.
    pub async fn invalidate(&self) {
        if self.current.lock().await.take().is_some() {
            info!("Cached access token invalidated");
        }
    }

    /// Snapshot of the cached token, if any, without refreshing.
    pub async fn cached_token(&self) -> Option<TokenSet> {
        self.current.lock().await.clone()
    }

    async fn exchange_locked(&self) -> Result<TokenSet, TokenManagerError> {
        let response = self.exchange.exchange().await.map_err(|e| {
            warn!(error = %e, "Access token exchange failed");
            TokenManagerError::from(e)
        })?;

        let token = TokenSet::from_response(response, self.clock.now()).ok_or_else(|| {
            warn!("Token response did not contain an access_token");
            TokenManagerError::MissingAccessToken
        })?;

        match token.expires_at {
            Some(expires_at) => info!(%expires_at, "Obtained new access token"),
            None => info!("Obtained new access token without expiry; it will not be reused"),
        }

        Ok(token)
    }
}

impl<C: TokenExchange> fmt::Debug for TokenManager<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenManager").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::testing::{MockClock, MockTokenExchange};

    fn manager(exchange: MockTokenExchange, clock: &MockClock) -> TokenManager<MockTokenExchange> {
        TokenManager::with_clock(exchange, Arc::new(clock.clone()))
    }

    #[tokio::test]
    async fn reuses_token_until_expiry() {
        let clock = MockClock::new();
        let exchange = MockTokenExchange::new().with_expires_in(Some(3600));
        let manager = manager(exchange.clone(), &clock);

        let first = manager.get_token().await.unwrap();
        let second = manager.get_token().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(exchange.call_count(), 1);
    }

    #[tokio::test]
    async fn refreshes_once_after_expiry() {
        let clock = MockClock::new();
        let exchange = MockTokenExchange::new().with_expires_in(Some(60));
        let manager = manager(exchange.clone(), &clock);

        let first = manager.get_token().await.unwrap();
        clock.advance(Duration::from_secs(60));
        let second = manager.get_token().await.unwrap();
        let third = manager.get_token().await.unwrap();

        assert_ne!(first, second);
        assert_eq!(second, third);
        assert_eq!(exchange.call_count(), 2);
    }

    #[tokio::test]
    async fn token_without_lifetime_is_not_reused() {
        let clock = MockClock::new();
        let exchange = MockTokenExchange::new().with_expires_in(None);
        let manager = manager(exchange.clone(), &clock);

        manager.get_token().await.unwrap();
        manager.get_token().await.unwrap();

        assert_eq!(exchange.call_count(), 2);
    }

    #[tokio::test]
    async fn missing_access_token_is_an_error() {
        let clock = MockClock::new();
        let exchange = MockTokenExchange::new().without_access_token();
        let manager = manager(exchange, &clock);

        let err = manager.get_token().await.unwrap_err();
        assert!(matches!(err, TokenManagerError::MissingAccessToken));
        assert!(manager.cached_token().await.is_none());
    }

    #[tokio::test]
    async fn failed_exchange_propagates_and_keeps_cache() {
        let clock = MockClock::new();
        let exchange = MockTokenExchange::new().with_expires_in(Some(60));
        let manager = manager(exchange.clone(), &clock);

        manager.get_token().await.unwrap();
        clock.advance(Duration::from_secs(120));
        exchange.set_should_fail(true);

        let err = manager.get_token().await.unwrap_err();
        assert!(matches!(err, TokenManagerError::Exchange(OAuthClientError::Rejected { .. })));
        assert!(manager.cached_token().await.is_some());
    }

    #[tokio::test]
    async fn invalidate_forces_new_exchange() {
        let clock = MockClock::new();
        let exchange = MockTokenExchange::new().with_expires_in(Some(3600));
        let manager = manager(exchange.clone(), &clock);

        manager.get_token().await.unwrap();
        manager.invalidate().await;
        manager.get_token().await.unwrap();

        assert_eq!(exchange.call_count(), 2);
    }

    #[tokio::test]
    async fn refresh_ignores_valid_cache() {
        let clock = MockClock::new();
        let exchange = MockTokenExchange::new().with_expires_in(Some(3600));
        let manager = manager(exchange.clone(), &clock);

        let first = manager.get_token().await.unwrap();
        let refreshed = manager.refresh().await.unwrap();

        assert_ne!(first, refreshed);
        assert_eq!(manager.get_token().await.unwrap(), refreshed);
        assert_eq!(exchange.call_count(), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_callers_share_one_exchange() {
        let clock = MockClock::new();
        let exchange = MockTokenExchange::new()
            .with_expires_in(Some(3600))
            .with_delay(Duration::from_millis(50));
        let manager = Arc::new(manager(exchange.clone(), &clock));

        let tasks: Vec<_> = (0..16)
            .map(|_| {
                let manager = Arc::clone(&manager);
                tokio::spawn(async move { manager.get_token().await.unwrap() })
            })
            .collect();

        let mut tokens = Vec::new();
        for task in tasks {
            tokens.push(task.await.unwrap());
        }

        assert_eq!(exchange.call_count(), 1);
        assert!(tokens.iter().all(|token| token == &tokens[0]));
    }
}
