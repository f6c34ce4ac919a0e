//! Client configuration

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{API_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, OAUTH_TOKEN_URL};
use crate::errors::{OlaMapsError, Result};
use crate::types::Credentials;

/// Client configuration
///
/// Every field has a default, so a partial JSON/TOML document is valid.
/// Credentials are optional here; [`ClientConfig::credentials`] decides
/// which authentication mode applies.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub client_id: Option<String>,
    #[serde(skip_serializing)]
    pub client_secret: Option<String>,
    pub base_url: String,
    pub token_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            client_id: None,
            client_secret: None,
            base_url: API_BASE_URL.to_string(),
            token_url: OAUTH_TOKEN_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Resolve the authentication mode. The API key wins when both are set.
    ///
    /// # Errors
    /// Returns `OlaMapsError::Config` when no usable credentials are present.
    pub fn credentials(&self) -> Result<Credentials> {
        Credentials::resolve(
            self.api_key.as_deref(),
            self.client_id.as_deref(),
            self.client_secret.as_deref(),
        )
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check the configuration without touching the network.
    ///
    /// # Errors
    /// Returns `OlaMapsError::Config` for missing credentials, an empty
    /// base or token URL, or a zero timeout.
    pub fn validate(&self) -> Result<()> {
        self.credentials()?;

        if self.base_url.trim().is_empty() {
            return Err(OlaMapsError::Config("base_url must not be empty".to_string()));
        }
        if self.token_url.trim().is_empty() {
            return Err(OlaMapsError::Config("token_url must not be empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(OlaMapsError::Config("timeout_secs must be greater than zero".to_string()));
        }

        Ok(())
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mask = |value: &Option<String>| value.as_ref().map(|_| "***");

        f.debug_struct("ClientConfig")
            .field("api_key", &mask(&self.api_key))
            .field("client_id", &self.client_id)
            .field("client_secret", &mask(&self.client_secret))
            .field("base_url", &self.base_url)
            .field("token_url", &self.token_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
