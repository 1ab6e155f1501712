//! Wallet service
//!
//! Validates balance operations and turns them into signed deltas for the
//! wallet store. Errors from the store are passed through untouched.

use std::sync::Arc;

use crate::domain::entities::{OperationKind, WalletId};
use crate::domain::ports::WalletRepository;
use crate::error::DomainError;

/// Service for wallet balance operations
pub struct WalletService<WR>
where
    WR: WalletRepository + ?Sized,
{
    wallets: Arc<WR>,
}

impl<WR> WalletService<WR>
where
    WR: WalletRepository + ?Sized,
{
    pub fn new(wallets: Arc<WR>) -> Self {
        Self { wallets }
    }

    /// Apply a DEPOSIT or WITHDRAW of `amount` to a wallet
    ///
    /// `amount` must be positive and `operation` must name a known kind
    /// exactly; both failures are `InvalidOperation` and never reach storage.
    /// A deposit into an unknown wallet creates it.
    pub async fn process(
        &self,
        wallet_id: &WalletId,
        operation: &str,
        amount: i64,
    ) -> Result<(), DomainError> {
        if amount <= 0 {
            return Err(DomainError::InvalidOperation(format!(
                "amount must be positive, got {}",
                amount
            )));
        }

        let kind: OperationKind = operation.parse().map_err(DomainError::InvalidOperation)?;

        tracing::debug!(
            wallet_id = %wallet_id,
            operation = %kind,
            amount,
            "Processing wallet operation"
        );

        self.wallets
            .apply_delta(wallet_id, kind.signed(amount))
            .await
    }

    /// Current balance of a wallet
    pub async fn balance(&self, wallet_id: &WalletId) -> Result<i64, DomainError> {
        self.wallets.get_balance(wallet_id).await
    }
}
