//! Wallet handlers
//!
//! Endpoints for balance operations and balance lookups. Wallet keys must be
//! UUIDs at this boundary; the core itself accepts any key.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::WalletId;
use crate::error::AppError;
use crate::AppState;

/// Request body for a balance operation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletOperationRequest {
    pub wallet_id: String,
    /// `DEPOSIT` or `WITHDRAW`
    pub operation_type: String,
    pub amount: i64,
}

/// Response body after a successful balance operation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletOperationResponse {
    pub wallet_id: String,
    pub balance: i64,
}

#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub balance: i64,
}

/// Parse a wallet key, normalizing it to the lowercase hyphenated UUID form
fn parse_wallet_id(raw: &str) -> Result<WalletId, AppError> {
    Uuid::parse_str(raw)
        .map(WalletId::from)
        .map_err(|_| AppError::BadRequest(format!("Invalid walletId: {}", raw)))
}

/// POST /api/v1/wallet
///
/// Apply a deposit or withdrawal, then return the wallet's new balance.
/// The first deposit to an unknown wallet creates it.
pub async fn post_wallet_operation(
    State(state): State<AppState>,
    payload: Result<Json<WalletOperationRequest>, JsonRejection>,
) -> Result<Json<WalletOperationResponse>, AppError> {
    let Json(request) = payload?;
    let wallet_id = parse_wallet_id(&request.wallet_id)?;

    state
        .wallet_service
        .process(&wallet_id, &request.operation_type, request.amount)
        .await?;

    let balance = state.wallet_service.balance(&wallet_id).await?;

    Ok(Json(WalletOperationResponse {
        wallet_id: wallet_id.to_string(),
        balance,
    }))
}

/// GET /api/v1/wallets/:id
pub async fn get_wallet_balance(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BalanceResponse>, AppError> {
    let wallet_id = parse_wallet_id(&id)?;
    let balance = state.wallet_service.balance(&wallet_id).await?;

    Ok(Json(BalanceResponse { balance }))
}
