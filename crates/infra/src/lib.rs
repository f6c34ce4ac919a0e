//! # Ola Maps Infrastructure
//!
//! HTTP implementation of the Ola Maps client.
//!
//! This crate contains:
//! - The shared HTTP client wrapper
//! - Request dispatch: authentication, correlation headers, status mapping
//! - Resource wrappers for routing, places, geocoding, roads and map tiles
//! - Configuration loading from files and environment variables
//!
//! ## Architecture
//! - Domain types and errors come from `olamaps-domain`
//! - Token caching comes from `olamaps-common`
//! - Contains all "impure" code (network, filesystem, environment)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod resources;

// Re-export commonly used items
pub use api::{AccessTokenProvider, Authenticator, OlaMapsClient, OlaMapsClientBuilder};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use resources::{Geocode, MapTiles, Places, Roads, Routing};
