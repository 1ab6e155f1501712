//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod wallet_service;

pub use wallet_service::WalletService;
