//! Shared runtime utilities for the Ola Maps crates.
//!
//! - [`auth`]: OAuth2 client-credentials exchange and the bearer token cache
//! - [`time`]: clock abstraction used for token expiry
//! - `testing` (feature `test-utils`): mock clock and mock token exchange

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod auth;
pub mod time;

// Testing utilities
// ---------------------------------------------------------------
#[cfg(any(feature = "test-utils", test))]
pub mod testing;

// Re-export commonly used types and traits for convenience
// ------------------------
pub use auth::{
    ClientCredentialsClient, OAuthClientError, TokenExchange, TokenManager, TokenManagerError,
    TokenResponse, TokenSet,
};
pub use time::{Clock, SystemClock};
