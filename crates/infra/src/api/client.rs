//! Ola Maps API client
//!
//! One generic execution routine serves every endpoint: it expands the
//! endpoint path, attaches authentication and correlation headers, performs
//! a single HTTP round trip and maps non-success statuses through the
//! status table in [`super::errors`].

use std::sync::Arc;
use std::time::Duration;

use olamaps_common::auth::{ClientCredentialsClient, TokenManager};
use olamaps_common::time::{Clock, SystemClock};
use olamaps_domain::constants::API_KEY_PARAM;
use olamaps_domain::endpoints::{EndpointRequest, HttpMethod};
use olamaps_domain::{
    ClientConfig, Credentials, OlaMapsError, RawResponse, RequestOptions, Result,
};
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, instrument, warn};
use url::Url;

use super::auth::Authenticator;
use super::errors::api_error_from_response;
use crate::config::loader;
use crate::errors::InfraError;
use crate::http::HttpClient;
use crate::resources::{Geocode, MapTiles, Places, Roads, Routing};

/// Client for the Ola Maps REST API
///
/// Cloning is cheap; clones share the connection pool and, in
/// client-credentials mode, the token cache.
#[derive(Debug, Clone)]
pub struct OlaMapsClient {
    http: HttpClient,
    base_url: Url,
    auth: Authenticator,
}

impl OlaMapsClient {
    /// Create a client from an explicit configuration.
    ///
    /// The environment is not consulted. No network call is made; in
    /// client-credentials mode the first token is fetched on first use.
    ///
    /// # Errors
    /// Returns `OlaMapsError::Config` for missing credentials or invalid
    /// URLs.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::builder().config(config).without_env().build()
    }

    /// Create a client from `OLA_MAPS_*` environment variables.
    ///
    /// # Errors
    /// Returns `OlaMapsError::Config` when the environment holds neither an
    /// API key nor a complete client ID/secret pair.
    pub fn from_env() -> Result<Self> {
        Self::builder().build()
    }

    /// Start building a client; see [`OlaMapsClientBuilder`] for precedence.
    pub fn builder() -> OlaMapsClientBuilder {
        OlaMapsClientBuilder::default()
    }

    /// Base URL every endpoint path is joined onto.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// How requests are authenticated.
    #[must_use]
    pub fn authenticator(&self) -> &Authenticator {
        &self.auth
    }

    /// Directions and distance matrix.
    pub fn routing(&self) -> Routing<'_> {
        Routing::new(self)
    }

    /// Autocomplete, place details, nearby and text search.
    pub fn places(&self) -> Places<'_> {
        Places::new(self)
    }

    /// Forward and reverse geocoding.
    pub fn geocode(&self) -> Geocode<'_> {
        Geocode::new(self)
    }

    /// Snap-to-road and nearest roads.
    pub fn roads(&self) -> Roads<'_> {
        Roads::new(self)
    }

    /// Vector tiles, styles, glyphs and static maps.
    pub fn map_tiles(&self) -> MapTiles<'_> {
        MapTiles::new(self)
    }

    /// Execute a request against a JSON endpoint.
    ///
    /// The parsed body is returned unmodified; an empty success body becomes
    /// `Value::Null`.
    ///
    /// # Errors
    /// - `OlaMapsError::Api` for a non-2xx status
    /// - `OlaMapsError::Auth` if the token exchange fails
    /// - `OlaMapsError::Network` for transport failures
    /// - `OlaMapsError::Decode` if a success body is not JSON
    pub async fn execute_json<R>(&self, request: &R, options: &RequestOptions) -> Result<Value>
    where
        R: EndpointRequest + Sync,
    {
        let response = self.dispatch(request, options).await?;

        if response.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&response.body).map_err(|err| InfraError::from(err).into())
    }

    /// Execute a request against a binary endpoint (tiles, glyphs, images).
    ///
    /// # Errors
    /// Same as [`execute_json`](Self::execute_json), minus decoding.
    pub async fn execute_raw<R>(&self, request: &R, options: &RequestOptions) -> Result<RawResponse>
    where
        R: EndpointRequest + Sync,
    {
        self.dispatch(request, options).await
    }

    #[instrument(skip_all, fields(method = %R::METHOD, path = %request.path()))]
    async fn dispatch<R>(&self, request: &R, options: &RequestOptions) -> Result<RawResponse>
    where
        R: EndpointRequest + Sync,
    {
        let url = self.endpoint_url(&request.path())?;

        let mut params = request.query_params();
        self.auth.apply_to_params(&mut params);

        let mut builder = self.http.request(to_reqwest_method(R::METHOD), url).query(&params);
        for (name, value) in options.headers() {
            builder = builder.header(name, value);
        }
        let builder = self.auth.apply_to_request(builder).await?;

        let response = self.http.send(builder).await?;
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await.map_err(InfraError::from)?.to_vec();

        if !status.is_success() {
            let redacted = params.redacted(API_KEY_PARAM);
            let error = api_error_from_response(status.as_u16(), &body, redacted);
            warn!(status = status.as_u16(), kind = error.kind.label(), "API request failed");

            if status == reqwest::StatusCode::UNAUTHORIZED {
                self.auth.on_unauthorized().await;
            }
            return Err(error.into());
        }

        debug!(status = status.as_u16(), bytes = body.len(), "API request succeeded");
        Ok(RawResponse { status: status.as_u16(), content_type, body })
    }

    /// Join an expanded endpoint path onto the base URL.
    ///
    /// Each path segment is percent-encoded here, so template values reach
    /// the server verbatim.
    fn endpoint_url(&self, path: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                OlaMapsError::Config(format!("base_url cannot carry a path: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(path.split('/').filter(|segment| !segment.is_empty()));
        Ok(url)
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
    }
}

/// Builder for [`OlaMapsClient`]
///
/// Precedence, highest first: values set on the builder, `OLA_MAPS_*`
/// environment variables (unless [`without_env`](Self::without_env)), the
/// base [`ClientConfig`], built-in defaults.
pub struct OlaMapsClientBuilder {
    config: ClientConfig,
    credentials: Option<Credentials>,
    base_url: Option<String>,
    token_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    clock: Option<Arc<dyn Clock>>,
    use_env: bool,
}

impl Default for OlaMapsClientBuilder {
    fn default() -> Self {
        Self {
            config: ClientConfig::default(),
            credentials: None,
            base_url: None,
            token_url: None,
            timeout: None,
            user_agent: None,
            clock: None,
            use_env: true,
        }
    }
}

impl OlaMapsClientBuilder {
    /// Start from a loaded configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Authenticate with a static API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::ApiKey(api_key.into()));
        self
    }

    /// Authenticate with an OAuth2 client-credentials pair.
    pub fn client_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.credentials = Some(Credentials::ClientCredentials {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        });
        self
    }

    /// Override the API base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Override the OAuth2 token endpoint.
    pub fn token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = Some(token_url.into());
        self
    }

    /// Per-request timeout. Sub-second values are kept exactly.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// `User-Agent` header sent with every request.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Clock used for token expiry.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Do not consult `OLA_MAPS_*` environment variables.
    pub fn without_env(mut self) -> Self {
        self.use_env = false;
        self
    }

    /// Resolve the effective configuration without building a client.
    ///
    /// A builder timeout is reported in whole seconds, rounded up; [`build`]
    /// uses the exact duration.
    ///
    /// [`build`]: Self::build
    ///
    /// # Errors
    /// Returns `OlaMapsError::Config` if an environment value is malformed.
    pub fn resolve_config(&self) -> Result<ClientConfig> {
        let mut config = self.config.clone();

        if self.use_env {
            config = loader::merge_env_with(config, |name| std::env::var(name).ok())?;
        }

        match &self.credentials {
            Some(Credentials::ApiKey(key)) => {
                config.api_key = Some(key.clone());
                config.client_id = None;
                config.client_secret = None;
            }
            Some(Credentials::ClientCredentials { client_id, client_secret }) => {
                config.api_key = None;
                config.client_id = Some(client_id.clone());
                config.client_secret = Some(client_secret.clone());
            }
            None => {}
        }

        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(token_url) = &self.token_url {
            config.token_url = token_url.clone();
        }
        if let Some(timeout) = self.timeout {
            // Rounded up so a sub-second timeout is not reported as zero.
            config.timeout_secs = timeout.as_secs() + u64::from(timeout.subsec_nanos() > 0);
        }
        if let Some(user_agent) = &self.user_agent {
            config.user_agent = user_agent.clone();
        }

        Ok(config)
    }

    /// Build the client. Performs no network calls.
    ///
    /// # Errors
    /// Returns `OlaMapsError::Config` when credentials are missing, a URL is
    /// invalid or the timeout is zero.
    pub fn build(self) -> Result<OlaMapsClient> {
        let config = self.resolve_config()?;
        loader::validate(&config)?;
        let timeout = self.timeout.unwrap_or_else(|| config.timeout());

        let base_url = Url::parse(config.base_url.trim())
            .map_err(|err| OlaMapsError::Config(format!("invalid base_url: {err}")))?;

        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        let auth = match config.credentials()? {
            Credentials::ApiKey(key) => {
                debug!("Ola Maps client using API key authentication");
                Authenticator::ApiKey(key)
            }
            Credentials::ClientCredentials { client_id, client_secret } => {
                debug!(%client_id, "Ola Maps client using client-credentials authentication");
                let exchange = ClientCredentialsClient::new(
                    config.token_url.trim(),
                    client_id,
                    client_secret,
                    http.inner().clone(),
                );
                let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
                Authenticator::Bearer(Arc::new(TokenManager::with_clock(exchange, clock)))
            }
        };

        Ok(OlaMapsClient { http, base_url, auth })
    }
}

impl std::fmt::Debug for OlaMapsClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OlaMapsClientBuilder")
            .field("config", &self.config)
            .field("credentials", &self.credentials)
            .field("base_url", &self.base_url)
            .field("token_url", &self.token_url)
            .field("timeout", &self.timeout)
            .field("use_env", &self.use_env)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use olamaps_domain::QueryParams;

    use super::*;

    struct FixedPath(&'static str);

    impl EndpointRequest for FixedPath {
        const METHOD: HttpMethod = HttpMethod::Get;

        fn path(&self) -> String {
            self.0.to_string()
        }

        fn query_params(&self) -> QueryParams {
            QueryParams::new()
        }
    }

    fn api_key_client(base_url: &str) -> OlaMapsClient {
        OlaMapsClient::builder().without_env().api_key("k").base_url(base_url).build().unwrap()
    }

    #[test]
    fn test_build_without_credentials_fails() {
        let err = OlaMapsClient::builder().without_env().build().unwrap_err();
        assert!(matches!(err, OlaMapsError::Config(_)));
    }

    #[test]
    fn test_build_rejects_invalid_base_url() {
        let err = OlaMapsClient::builder()
            .without_env()
            .api_key("k")
            .base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, OlaMapsError::Config(_)));
    }

    #[test]
    fn test_builder_credentials_replace_config_credentials() {
        let config =
            ClientConfig { api_key: Some("from-config".into()), ..ClientConfig::default() };
        let resolved = OlaMapsClient::builder()
            .config(config)
            .without_env()
            .client_credentials("id", "secret")
            .resolve_config()
            .unwrap();

        assert_eq!(resolved.api_key, None);
        assert!(matches!(resolved.credentials().unwrap(), Credentials::ClientCredentials { .. }));
    }

    #[test]
    fn test_auth_mode_follows_credentials() {
        assert!(api_key_client("https://api.olamaps.io").authenticator().is_api_key());

        let client = OlaMapsClient::builder()
            .without_env()
            .client_credentials("id", "secret")
            .build()
            .unwrap();
        assert!(!client.authenticator().is_api_key());
    }

    #[test]
    fn test_sub_second_timeout_is_accepted() {
        let builder = OlaMapsClient::builder()
            .without_env()
            .api_key("k")
            .timeout(Duration::from_millis(500));

        assert_eq!(builder.resolve_config().unwrap().timeout_secs, 1);
        assert!(builder.build().is_ok());
    }

    #[test]
    fn test_fractional_timeout_rounds_up_in_resolved_config() {
        let resolved = OlaMapsClient::builder()
            .without_env()
            .api_key("k")
            .timeout(Duration::from_millis(1500))
            .resolve_config()
            .unwrap();

        assert_eq!(resolved.timeout_secs, 2);
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let err = OlaMapsClient::builder()
            .without_env()
            .api_key("k")
            .timeout(Duration::ZERO)
            .build()
            .unwrap_err();

        assert!(matches!(err, OlaMapsError::Config(_)));
    }

    #[test]
    fn test_endpoint_url_joins_and_encodes_segments() {
        let client = api_key_client("https://api.olamaps.io/");
        let path = FixedPath("/tiles/vector/v1/fonts/Noto Sans/0-255.pbf").path();
        let url = client.endpoint_url(&path);

        assert_eq!(
            url.unwrap().as_str(),
            "https://api.olamaps.io/tiles/vector/v1/fonts/Noto%20Sans/0-255.pbf"
        );
    }

    #[test]
    fn test_endpoint_url_keeps_base_path_prefix() {
        let client = api_key_client("http://proxy.local/olamaps");
        let url = client.endpoint_url("/places/v1/geocode").unwrap();

        assert_eq!(url.as_str(), "http://proxy.local/olamaps/places/v1/geocode");
    }
}
