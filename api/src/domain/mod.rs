//! Domain layer
//!
//! Wallet model and the storage port the services depend on.
//! - `entities`: Wallet key, wallet, and operation kinds
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
