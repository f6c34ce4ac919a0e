//! Configuration loader
//!
//! Loads client configuration from files and environment variables.
//!
//! ## Loading Strategy
//! 1. Start from the file given explicitly, or the first file found by
//!    [`probe_config_paths`], or the built-in defaults
//! 2. Layer `OLA_MAPS_*` environment variables on top
//! 3. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `OLA_MAPS_API_KEY`: API key (filled in when absent from the file)
//! - `OLA_MAPS_CLIENT_ID`: OAuth2 client ID (filled in when absent)
//! - `OLA_MAPS_CLIENT_SECRET`: OAuth2 client secret (filled in when absent)
//! - `OLA_MAPS_BASE_URL`: API base URL override
//! - `OLA_MAPS_TOKEN_URL`: token endpoint override
//! - `OLA_MAPS_TIMEOUT_SECS`: request timeout in seconds
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./olamaps.toml` or `./olamaps.json` (current working directory)
//! 2. `$XDG_CONFIG_HOME/olamaps/config.{toml,json}`, falling back to
//!    `~/.config/olamaps/config.{toml,json}`

use std::path::{Path, PathBuf};

use olamaps_domain::constants::{
    ENV_API_KEY, ENV_BASE_URL, ENV_CLIENT_ID, ENV_CLIENT_SECRET, ENV_TIMEOUT_SECS, ENV_TOKEN_URL,
};
use olamaps_domain::{ClientConfig, OlaMapsError, Result};
use url::Url;

/// Load configuration with automatic fallback strategy
///
/// Reads `path` when given, otherwise the first probed config file, otherwise
/// starts from defaults; then applies the process environment.
///
/// # Errors
/// Returns `OlaMapsError::Config` if:
/// - An explicitly given file does not exist
/// - File format is invalid
/// - An environment value is malformed
pub fn load(path: Option<PathBuf>) -> Result<ClientConfig> {
    let base = match path.or_else(probe_config_paths) {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::debug!("No config file found, using defaults");
            ClientConfig::default()
        }
    };

    merge_env_with(base, |name| std::env::var(name).ok())
}

/// Load configuration from environment variables only
///
/// Missing variables keep their defaults; credential completeness is checked
/// later by [`validate`].
///
/// # Errors
/// Returns `OlaMapsError::Config` if `OLA_MAPS_TIMEOUT_SECS` is not a number.
pub fn load_from_env() -> Result<ClientConfig> {
    merge_env_with(ClientConfig::default(), |name| std::env::var(name).ok())
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `OlaMapsError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<ClientConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(OlaMapsError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            OlaMapsError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| OlaMapsError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Apply environment values using `lookup` to read variables.
///
/// Credentials are only filled in where the configuration has none, so a
/// file can pin credentials regardless of the shell. Base URL, token URL and
/// timeout are overridden when their variable is set. Empty values count as
/// unset.
///
/// # Errors
/// Returns `OlaMapsError::Config` if the timeout variable is not a positive
/// integer.
pub fn merge_env_with<F>(mut config: ClientConfig, lookup: F) -> Result<ClientConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

    if config.api_key.is_none() {
        config.api_key = var(ENV_API_KEY);
    }
    if config.client_id.is_none() {
        config.client_id = var(ENV_CLIENT_ID);
    }
    if config.client_secret.is_none() {
        config.client_secret = var(ENV_CLIENT_SECRET);
    }

    if let Some(base_url) = var(ENV_BASE_URL) {
        config.base_url = base_url;
    }
    if let Some(token_url) = var(ENV_TOKEN_URL) {
        config.token_url = token_url;
    }
    if let Some(timeout) = var(ENV_TIMEOUT_SECS) {
        config.timeout_secs = timeout.trim().parse::<u64>().map_err(|e| {
            OlaMapsError::Config(format!("Invalid {ENV_TIMEOUT_SECS} value {timeout:?}: {e}"))
        })?;
    }

    Ok(config)
}

/// Validate a configuration without touching the network
///
/// Adds URL parsing on top of [`ClientConfig::validate`].
///
/// # Errors
/// Returns `OlaMapsError::Config` for missing credentials, a zero timeout,
/// or a base/token URL that is not an absolute `http(s)` URL.
pub fn validate(config: &ClientConfig) -> Result<()> {
    config.validate()?;
    check_url("base_url", &config.base_url)?;
    check_url("token_url", &config.token_url)?;
    Ok(())
}

fn check_url(field: &str, value: &str) -> Result<()> {
    let url = Url::parse(value.trim())
        .map_err(|e| OlaMapsError::Config(format!("Invalid {field} {value:?}: {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(OlaMapsError::Config(format!(
            "Invalid {field} {value:?}: unsupported scheme {other:?}"
        ))),
    }
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `OlaMapsError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<ClientConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| OlaMapsError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| OlaMapsError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(OlaMapsError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe the standard locations for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend([cwd.join("olamaps.toml"), cwd.join("olamaps.json")]);
    }

    let config_home = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")));
    if let Some(dir) = config_home.map(|base| base.join("olamaps")) {
        candidates.extend([dir.join("config.toml"), dir.join("config.json")]);
    }

    candidates.into_iter().find(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use olamaps_domain::constants::{API_BASE_URL, OAUTH_TOKEN_URL};
    use olamaps_domain::Credentials;
    use tempfile::Builder;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_merge_env_fills_missing_credentials() {
        let config = merge_env_with(
            ClientConfig::default(),
            lookup(&[(ENV_CLIENT_ID, "id"), (ENV_CLIENT_SECRET, "secret")]),
        )
        .unwrap();

        assert_eq!(config.client_id.as_deref(), Some("id"));
        assert!(matches!(config.credentials().unwrap(), Credentials::ClientCredentials { .. }));
    }

    #[test]
    fn test_merge_env_keeps_credentials_from_file() {
        let file = ClientConfig { api_key: Some("from-file".into()), ..ClientConfig::default() };
        let config = merge_env_with(file, lookup(&[(ENV_API_KEY, "from-env")])).unwrap();

        assert_eq!(config.api_key.as_deref(), Some("from-file"));
    }

    #[test]
    fn test_merge_env_overrides_urls_and_timeout() {
        let config = merge_env_with(
            ClientConfig::default(),
            lookup(&[
                (ENV_BASE_URL, "http://localhost:8080"),
                (ENV_TOKEN_URL, "http://localhost:8081/token"),
                (ENV_TIMEOUT_SECS, "5"),
            ]),
        )
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.token_url, "http://localhost:8081/token");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_merge_env_ignores_empty_values() {
        let config = merge_env_with(
            ClientConfig::default(),
            lookup(&[(ENV_API_KEY, ""), (ENV_BASE_URL, "  ")]),
        )
        .unwrap();

        assert_eq!(config.api_key, None);
        assert_eq!(config.base_url, API_BASE_URL);
    }

    #[test]
    fn test_merge_env_invalid_timeout() {
        let result = merge_env_with(ClientConfig::default(), lookup(&[(ENV_TIMEOUT_SECS, "soon")]));
        assert!(matches!(result, Err(OlaMapsError::Config(_))));
    }

    #[test]
    fn test_validate_checks_urls() {
        let mut config = ClientConfig { api_key: Some("k".into()), ..ClientConfig::default() };
        assert!(validate(&config).is_ok());

        config.base_url = "ftp://api.olamaps.io".into();
        assert!(matches!(validate(&config), Err(OlaMapsError::Config(_))));

        config.base_url = API_BASE_URL.into();
        config.token_url = "not a url".into();
        assert!(matches!(validate(&config), Err(OlaMapsError::Config(_))));
    }

    #[test]
    fn test_load_from_file_toml() {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "api_key = \"toml-key\"\ntimeout_secs = 10").unwrap();

        let config = load_from_file(Some(file.path().to_path_buf())).unwrap();

        assert_eq!(config.api_key.as_deref(), Some("toml-key"));
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.token_url, OAUTH_TOKEN_URL);
    }

    #[test]
    fn test_load_from_file_invalid_json() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "{{ not json").unwrap();

        let result = load_from_file(Some(file.path().to_path_buf()));
        assert!(matches!(result, Err(OlaMapsError::Config(_))));
    }

    #[test]
    fn test_load_from_file_unsupported_extension() {
        let mut file = Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(file, "api_key: k").unwrap();

        let result = load_from_file(Some(file.path().to_path_buf()));
        assert!(matches!(result, Err(OlaMapsError::Config(msg)) if msg.contains("yaml")));
    }

    #[test]
    fn test_load_from_file_missing() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/olamaps.toml")));
        assert!(matches!(result, Err(OlaMapsError::Config(msg)) if msg.contains("not found")));
    }
}
