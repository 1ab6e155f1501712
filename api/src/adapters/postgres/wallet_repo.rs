//! PostgreSQL adapter for WalletRepository
//!
//! Every mutation runs inside one `DatabaseTransaction`. Returning early with an
//! error drops the transaction, which rolls it back, so no failure path leaves
//! a partial write behind. The same holds when the request future is cancelled.

use async_trait::async_trait;
use sea_orm::{
    sea_query::{Expr, OnConflict},
    ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, QueryFilter, QuerySelect,
    Set, TransactionTrait,
};

use crate::domain::entities::{Wallet, WalletId};
use crate::domain::ports::WalletRepository;
use crate::entity::wallets;
use crate::error::DomainError;

/// PostgreSQL implementation of WalletRepository
pub struct PostgresWalletRepository {
    db: DatabaseConnection,
}

impl PostgresWalletRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// `SELECT ... FOR UPDATE` on the wallet row. The lock lives until `txn` ends.
async fn lock_balance(
    txn: &DatabaseTransaction,
    id: &WalletId,
) -> Result<Option<i64>, DomainError> {
    let result = wallets::Entity::find_by_id(id.0.clone())
        .lock_exclusive()
        .one(txn)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

    Ok(result.map(|m| m.balance))
}

/// Insert a new wallet row. Returns false if a concurrent transaction created
/// the row first.
async fn insert_wallet(
    txn: &DatabaseTransaction,
    id: &WalletId,
    balance: i64,
) -> Result<bool, DomainError> {
    let model = wallets::ActiveModel {
        id: Set(id.0.clone()),
        balance: Set(balance),
    };

    let rows = wallets::Entity::insert(model)
        .on_conflict(
            OnConflict::column(wallets::Column::Id)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(txn)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

    Ok(rows == 1)
}

#[async_trait]
impl WalletRepository for PostgresWalletRepository {
    async fn apply_delta(&self, id: &WalletId, delta: i64) -> Result<(), DomainError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let current = match lock_balance(&txn, id).await? {
            Some(balance) => balance,
            None => {
                if delta < 0 {
                    tracing::debug!(wallet_id = %id, delta, "Rejected withdrawal from missing wallet");
                    return Err(DomainError::WalletNotFound(id.to_string()));
                }

                if insert_wallet(&txn, id, delta).await? {
                    txn.commit()
                        .await
                        .map_err(|e| DomainError::Database(e.to_string()))?;
                    tracing::info!(wallet_id = %id, balance = delta, "Wallet created");
                    return Ok(());
                }

                // Lost the creation race: the row is committed now, so lock it
                // and fall through to the update path.
                tracing::debug!(wallet_id = %id, "Concurrent wallet creation, retrying locked read");
                lock_balance(&txn, id).await?.ok_or_else(|| {
                    DomainError::Database(format!(
                        "wallet {} missing after conflicting insert",
                        id
                    ))
                })?
            }
        };

        let new_balance = current.checked_add(delta).ok_or_else(|| {
            DomainError::Database(format!("balance overflow for wallet {}", id))
        })?;

        if new_balance < 0 {
            tracing::debug!(wallet_id = %id, delta, "Rejected withdrawal, insufficient funds");
            return Err(DomainError::InsufficientFunds(format!(
                "wallet {} cannot cover withdrawal of {}",
                id,
                delta.unsigned_abs()
            )));
        }

        wallets::Entity::update_many()
            .col_expr(wallets::Column::Balance, Expr::value(new_balance))
            .filter(wallets::Column::Id.eq(id.as_str()))
            .exec(&txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        tracing::debug!(wallet_id = %id, delta, balance = new_balance, "Balance updated");
        Ok(())
    }

    async fn get_balance(&self, id: &WalletId) -> Result<i64, DomainError> {
        let result = wallets::Entity::find_by_id(id.0.clone())
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result
            .map(|m| Wallet::from(m).balance)
            .ok_or_else(|| DomainError::WalletNotFound(id.to_string()))
    }
}

/// Convert SeaORM model to domain entity
impl From<wallets::Model> for Wallet {
    fn from(model: wallets::Model) -> Self {
        Wallet {
            id: WalletId::from(model.id),
            balance: model.balance,
        }
    }
}
