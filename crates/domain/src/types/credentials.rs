//! Client credentials

use std::fmt;

use crate::errors::{OlaMapsError, Result};

/// How the client authenticates: a static API key, or an OAuth2
/// client-credentials pair exchanged for bearer tokens.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    ApiKey(String),
    ClientCredentials { client_id: String, client_secret: String },
}

impl Credentials {
    /// Pick credentials from optional inputs.
    ///
    /// An API key wins over a client-credentials pair. Empty strings count as
    /// absent.
    ///
    /// # Errors
    /// Returns `OlaMapsError::Config` when neither an API key nor a complete
    /// client ID/secret pair is available.
    pub fn resolve(
        api_key: Option<&str>,
        client_id: Option<&str>,
        client_secret: Option<&str>,
    ) -> Result<Self> {
        fn present(value: Option<&str>) -> Option<&str> {
            value.filter(|v| !v.trim().is_empty())
        }

        if let Some(key) = present(api_key) {
            return Ok(Self::ApiKey(key.to_string()));
        }

        match (present(client_id), present(client_secret)) {
            (Some(id), Some(secret)) => Ok(Self::ClientCredentials {
                client_id: id.to_string(),
                client_secret: secret.to_string(),
            }),
            _ => Err(OlaMapsError::Config(
                "You must provide either an api_key or both client_id and client_secret. Set \
                 OLA_MAPS_API_KEY, or both OLA_MAPS_CLIENT_ID and OLA_MAPS_CLIENT_SECRET, or pass \
                 them explicitly."
                    .to_string(),
            )),
        }
    }

    #[must_use]
    pub fn is_api_key(&self) -> bool {
        matches!(self, Self::ApiKey(_))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiKey(_) => f.debug_tuple("ApiKey").field(&"***").finish(),
            Self::ClientCredentials { client_id, .. } => f
                .debug_struct("ClientCredentials")
                .field("client_id", client_id)
                .field("client_secret", &"***")
                .finish(),
        }
    }
}
