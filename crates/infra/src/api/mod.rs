//! Ola Maps API client
//!
//! Request dispatch for every endpoint: authentication (API key or OAuth2
//! bearer token), correlation headers and status-to-error mapping.
//!
//! # Architecture
//!
//! - Uses the shared [`HttpClient`](crate::http::HttpClient), one attempt per
//!   request
//! - Bearer tokens come from `olamaps_common::auth::TokenManager`
//! - Non-success statuses map to `OlaMapsError::Api` through one table

pub mod auth;
pub mod client;
pub mod errors;

pub use auth::{AccessTokenProvider, Authenticator};
pub use client::{OlaMapsClient, OlaMapsClientBuilder};
pub use errors::{api_error_from_response, classify_status, decode_error_body};
