//! Time abstractions
//!
//! Token expiry is computed against an injectable [`Clock`] so cache
//! behavior can be tested without real time passing. A controllable
//! `MockClock` lives in `testing` (feature `test-utils`).

pub mod clock;

pub use clock::{Clock, SystemClock};
