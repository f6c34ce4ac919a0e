//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files and
//! building a client from it.

use std::io::Write;

use olamaps_domain::{Credentials, OlaMapsError};
use olamaps_infra::{config, OlaMapsClient};
use tempfile::Builder;
use wiremock::MockServer;

#[test]
fn test_load_config_from_json_file() {
    let json_content = r#"{
        "client_id": "json-client",
        "client_secret": "json-secret",
        "base_url": "http://localhost:9000",
        "timeout_secs": 12
    }"#;

    let mut temp_file = Builder::new().suffix(".json").tempfile().expect("create temp file");
    temp_file.write_all(json_content.as_bytes()).expect("write temp file");

    let config = config::load_from_file(Some(temp_file.path().to_path_buf()))
        .expect("Failed to load config from JSON file");

    assert_eq!(config.base_url, "http://localhost:9000");
    assert_eq!(config.timeout_secs, 12);
    match config.credentials().expect("credentials") {
        Credentials::ClientCredentials { client_id, client_secret } => {
            assert_eq!(client_id, "json-client");
            assert_eq!(client_secret, "json-secret");
        }
        other => panic!("unexpected credentials: {other:?}"),
    }
}

#[test]
fn test_load_config_from_toml_file() {
    let toml_content = r#"
api_key = "toml-key"
user_agent = "integration-tests/1.0"
"#;

    let mut temp_file = Builder::new().suffix(".toml").tempfile().expect("create temp file");
    temp_file.write_all(toml_content.as_bytes()).expect("write temp file");

    let config = config::load_from_file(Some(temp_file.path().to_path_buf()))
        .expect("Failed to load config from TOML file");

    assert_eq!(config.api_key.as_deref(), Some("toml-key"));
    assert_eq!(config.user_agent, "integration-tests/1.0");
    assert!(config::validate(&config).is_ok());
}

#[test]
fn test_file_without_credentials_fails_validation() {
    let mut temp_file = Builder::new().suffix(".toml").tempfile().expect("create temp file");
    temp_file.write_all(b"timeout_secs = 5\n").expect("write temp file");

    let config = config::load_from_file(Some(temp_file.path().to_path_buf())).unwrap();
    let err = config::validate(&config).unwrap_err();

    assert!(matches!(err, OlaMapsError::Config(_)));
}

/// Validates that building a client from a file never touches the network,
/// even in client-credentials mode.
#[tokio::test]
async fn test_client_from_file_makes_no_requests() {
    let server = MockServer::start().await;

    let toml_content = format!(
        "client_id = \"id\"\nclient_secret = \"secret\"\nbase_url = \"{uri}\"\ntoken_url = \
         \"{uri}/token\"\n",
        uri = server.uri()
    );
    let mut temp_file = Builder::new().suffix(".toml").tempfile().expect("create temp file");
    temp_file.write_all(toml_content.as_bytes()).expect("write temp file");

    let config = config::load_from_file(Some(temp_file.path().to_path_buf())).unwrap();
    let client = OlaMapsClient::new(config).expect("client should build");

    assert_eq!(client.base_url().as_str(), format!("{}/", server.uri()));
    assert!(server.received_requests().await.unwrap().is_empty());
}
