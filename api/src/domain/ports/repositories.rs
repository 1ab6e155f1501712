//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::WalletId;
use crate::error::DomainError;

/// Durable store for wallet balances
#[async_trait]
pub trait WalletRepository: Send + Sync {
    /// Atomically apply a signed delta to a wallet's balance
    ///
    /// Runs as one unit of work holding an exclusive lock on the wallet row.
    /// A missing wallet is created when `delta >= 0`; a negative delta against
    /// a missing wallet fails with `WalletNotFound`. A result below zero fails
    /// with `InsufficientFunds` and leaves the balance untouched.
    async fn apply_delta(&self, id: &WalletId, delta: i64) -> Result<(), DomainError>;

    /// Read the committed balance without taking the mutation lock
    async fn get_balance(&self, id: &WalletId) -> Result<i64, DomainError>;
}
