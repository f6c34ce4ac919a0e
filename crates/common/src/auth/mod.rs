//! OAuth2 client-credentials authentication
//!
//! Exchanges a client ID/secret pair for short-lived bearer tokens and caches
//! them until they expire.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  TokenManager   │  Cache + expiry, serializes refreshes
//! └────────┬────────┘
//!          │
//!          └──► TokenExchange           (trait)
//!                    │
//!                    └──► ClientCredentialsClient  (HTTP form POST)
//! ```
//!
//! # Usage Example
//!
//! ```no_run
//! use olamaps_common::auth::{ClientCredentialsClient, TokenManager};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let exchange = ClientCredentialsClient::new(
//!     "https://account.olamaps.io/realms/olamaps/protocol/openid-connect/token",
//!     "client_id",
//!     "client_secret",
//!     reqwest::Client::new(),
//! );
//! let manager = TokenManager::new(exchange);
//!
//! // First call performs the exchange, later calls reuse the cached token
//! let token = manager.get_token().await?;
//! println!("Bearer {token}");
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - **[`types`]**: token endpoint response and cached `TokenSet`
//! - **[`client`]**: HTTP client for the token endpoint
//! - **[`traits`]**: `TokenExchange` seam for injecting fakes
//! - **[`token_manager`]**: token cache with expiry

pub mod client;
pub mod token_manager;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use client::{ClientCredentialsClient, OAuthClientError};
pub use token_manager::{TokenManager, TokenManagerError};
pub use traits::TokenExchange;
pub use types::{TokenResponse, TokenSet};
