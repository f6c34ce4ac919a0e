//! Testing utilities and helpers
//!
//! - **[`mocks`]**: scripted [`TokenExchange`](crate::auth::TokenExchange)
//! - **[`time`]**: controllable [`Clock`](crate::time::Clock)
//!
//! ## Usage
//!
//! ```rust
//! # #[cfg(feature = "test-utils")]
//! # {
//! use std::sync::Arc;
//!
//! use olamaps_common::auth::TokenManager;
//! use olamaps_common::testing::{MockClock, MockTokenExchange};
//!
//! let clock = MockClock::new();
//! let exchange = MockTokenExchange::new().with_expires_in(Some(60));
//! let manager = TokenManager::with_clock(exchange.clone(), Arc::new(clock.clone()));
//! clock.advance(std::time::Duration::from_secs(61));
//! # }
//! ```

pub mod mocks;
pub mod time;

pub use mocks::MockTokenExchange;
pub use time::MockClock;
