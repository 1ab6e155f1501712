//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! The in-memory store takes a per-wallet lock around each read-modify-write.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
