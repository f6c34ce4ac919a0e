//! # Ola Maps Domain
//!
//! Pure domain types for the Ola Maps client.
//!
//! This crate contains:
//! - Error taxonomy and the crate-wide `Result` alias
//! - Client configuration and credential resolution
//! - Query parameters, request options and raw responses
//! - Endpoint templates and per-endpoint request types
//!
//! ## Architecture
//! - No dependencies on other olamaps crates
//! - No I/O; HTTP lives in `olamaps-infra`

pub mod config;
pub mod constants;
pub mod endpoints;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
