//! Wallet domain entity
//!
//! A wallet is a single non-negative balance addressed by an opaque key.
//! Wallets come into existence on their first deposit; there is no explicit
//! create or delete.

use uuid::Uuid;

/// Unique key of a wallet
///
/// The core accepts any string. Format checks (UUID shape) belong to the
/// HTTP boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WalletId(pub String);

impl WalletId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Uuid> for WalletId {
    fn from(id: Uuid) -> Self {
        Self(id.hyphenated().to_string())
    }
}

impl From<&str> for WalletId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for WalletId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for WalletId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A wallet and its current balance in minor units
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wallet {
    pub id: WalletId,
    pub balance: i64,
}

/// Balance-changing operation requested by a client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Deposit,
    Withdraw,
}

impl OperationKind {
    /// Signed delta this operation applies for a positive `amount`
    pub fn signed(self, amount: i64) -> i64 {
        match self {
            OperationKind::Deposit => amount,
            OperationKind::Withdraw => -amount,
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationKind::Deposit => write!(f, "DEPOSIT"),
            OperationKind::Withdraw => write!(f, "WITHDRAW"),
        }
    }
}

impl std::str::FromStr for OperationKind {
    type Err = String;

    /// Exact, case-sensitive match on the wire names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DEPOSIT" => Ok(OperationKind::Deposit),
            "WITHDRAW" => Ok(OperationKind::Withdraw),
            _ => Err(format!("Unknown operation type: {}", s)),
        }
    }
}
