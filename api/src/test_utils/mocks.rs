//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use crate::domain::entities::{Wallet, WalletId};
use crate::domain::ports::WalletRepository;
use crate::error::DomainError;

// ============================================================================
// In-Memory Wallet Repository
// ============================================================================

/// Wallet store backed by a HashMap
///
/// Mirrors the row-lock protocol of the Postgres adapter: each key has its own
/// async mutex held across the read-modify-write, and the task yields between
/// the read and the write so a missing lock would show up as lost updates.
#[derive(Default)]
pub struct InMemoryWalletRepository {
    balances: Arc<RwLock<HashMap<WalletId, i64>>>,
    row_locks: Arc<Mutex<HashMap<WalletId, Arc<tokio::sync::Mutex<()>>>>>,
    requested: Arc<RwLock<Vec<(WalletId, i64)>>>,
    should_fail: bool,
}

impl InMemoryWalletRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with a storage error
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Pre-populate with a wallet for testing
    pub fn with_wallet(self, wallet: Wallet) -> Self {
        self.balances
            .write()
            .unwrap()
            .insert(wallet.id, wallet.balance);
        self
    }

    /// Deltas passed to `apply_delta`, in call order
    pub fn applied_deltas(&self) -> Vec<(WalletId, i64)> {
        self.requested.read().unwrap().clone()
    }

    /// Whether a wallet row exists
    pub fn contains(&self, id: &WalletId) -> bool {
        self.balances.read().unwrap().contains_key(id)
    }

    fn row_lock(&self, id: &WalletId) -> Arc<tokio::sync::Mutex<()>> {
        self.row_locks
            .lock()
            .unwrap()
            .entry(id.clone())
            .or_default()
            .clone()
    }

    fn storage_failure() -> DomainError {
        DomainError::Database("simulated storage failure".to_string())
    }
}

#[async_trait]
impl WalletRepository for InMemoryWalletRepository {
    async fn apply_delta(&self, id: &WalletId, delta: i64) -> Result<(), DomainError> {
        self.requested.write().unwrap().push((id.clone(), delta));

        if self.should_fail {
            return Err(Self::storage_failure());
        }

        let row_lock = self.row_lock(id);
        let _guard = row_lock.lock().await;

        let current = self.balances.read().unwrap().get(id).copied();
        tokio::task::yield_now().await;

        let new_balance = match current {
            None if delta < 0 => return Err(DomainError::WalletNotFound(id.to_string())),
            None => delta,
            Some(balance) => {
                let new_balance = balance + delta;
                if new_balance < 0 {
                    return Err(DomainError::InsufficientFunds(id.to_string()));
                }
                new_balance
            }
        };

        self.balances
            .write()
            .unwrap()
            .insert(id.clone(), new_balance);
        Ok(())
    }

    async fn get_balance(&self, id: &WalletId) -> Result<i64, DomainError> {
        if self.should_fail {
            return Err(Self::storage_failure());
        }

        self.balances
            .read()
            .unwrap()
            .get(id)
            .copied()
            .ok_or_else(|| DomainError::WalletNotFound(id.to_string()))
    }
}
