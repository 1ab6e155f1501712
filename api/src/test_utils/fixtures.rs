//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use uuid::Uuid;

use crate::domain::entities::{Wallet, WalletId};

/// A fresh wallet key in the canonical UUID form
pub fn test_wallet_id() -> WalletId {
    WalletId::from(Uuid::new_v4())
}

/// A wallet with a fresh key and the given balance
pub fn test_wallet(balance: i64) -> Wallet {
    Wallet {
        id: test_wallet_id(),
        balance,
    }
}
