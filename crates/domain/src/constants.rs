//! Service constants
//!
//! Hosts, parameter/header names and environment variable
//! names shared by every crate in the workspace.

// Hosts
pub const API_BASE_URL: &str = "https://api.olamaps.io";
pub const OAUTH_TOKEN_URL: &str =
    "https://account.olamaps.io/realms/olamaps/protocol/openid-connect/token";

// Request decoration
pub const API_KEY_PARAM: &str = "api_key";
pub const REQUEST_ID_HEADER: &str = "x_request_id";
pub const CORRELATION_ID_HEADER: &str = "x_correlation_id";
pub const REDACTED: &str = "[REDACTED]";

// Environment variables consulted when credentials are not passed explicitly
pub const ENV_API_KEY: &str = "OLA_MAPS_API_KEY";
pub const ENV_CLIENT_ID: &str = "OLA_MAPS_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "OLA_MAPS_CLIENT_SECRET";
pub const ENV_BASE_URL: &str = "OLA_MAPS_BASE_URL";
pub const ENV_TOKEN_URL: &str = "OLA_MAPS_TOKEN_URL";
pub const ENV_TIMEOUT_SECS: &str = "OLA_MAPS_TIMEOUT_SECS";

// Transport defaults
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("olamaps-rs/", env!("CARGO_PKG_VERSION"));

// Endpoint defaults taken from the service documentation
pub const DEFAULT_NEAREST_ROADS_RADIUS_M: u32 = 500;
pub const DEFAULT_DIRECTIONS_LANGUAGE: &str = "en";
