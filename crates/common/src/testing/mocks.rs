//! Mock implementations of the auth traits

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::auth::{OAuthClientError, TokenExchange, TokenResponse};

/// Scripted token exchange that counts its calls
///
/// Every successful call returns a distinct token (`mock-token-1`,
/// `mock-token-2`, ...). Clones share the call counter and settings.
#[derive(Debug, Clone)]
pub struct MockTokenExchange {
    calls: Arc<AtomicUsize>,
    should_fail: Arc<AtomicBool>,
    expires_in: Option<i64>,
    include_token: bool,
    delay: Option<Duration>,
}

impl MockTokenExchange {
    /// Create a mock issuing one-hour tokens.
    #[must_use]
    pub fn new() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            should_fail: Arc::new(AtomicBool::new(false)),
            expires_in: Some(3600),
            include_token: true,
            delay: None,
        }
    }

    /// Lifetime reported in the response; `None` omits `expires_in`.
    #[must_use]
    pub fn with_expires_in(mut self, expires_in: Option<i64>) -> Self {
        self.expires_in = expires_in;
        self
    }

    /// Respond successfully but without an `access_token`.
    #[must_use]
    pub fn without_access_token(mut self) -> Self {
        self.include_token = false;
        self
    }

    /// Sleep before answering, to widen race windows.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Make subsequent calls fail with a 401 rejection.
    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockTokenExchange {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenExchange for MockTokenExchange {
    async fn exchange(&self) -> Result<TokenResponse, OAuthClientError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.should_fail.load(Ordering::SeqCst) {
            return Err(OAuthClientError::Rejected {
                status: 401,
                body: r#"{"error":"invalid_client"}"#.to_string(),
            });
        }

        Ok(TokenResponse {
            access_token: self.include_token.then(|| format!("mock-token-{call}")),
            token_type: Some("Bearer".to_string()),
            expires_in: self.expires_in,
            scope: Some("openid".to_string()),
        })
    }
}
