//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod wallets;

pub use wallets::{get_wallet_balance, post_wallet_operation};
