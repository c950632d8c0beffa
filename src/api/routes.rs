//! API Routes
//!
//! HTTP endpoint definitions.

use std::collections::BTreeMap;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;

use crate::domain::Transaction;
use crate::error::{AppError, AppResult};

use super::SharedAccount;

// =========================================================================
// Request/Response types
// =========================================================================

#[derive(Debug, Deserialize)]
pub struct SpendRequest {
    pub points: i64,
}

/// Payer -> points map returned by both `/balance` and `/spend`.
pub type PointsByPayer = BTreeMap<String, i64>;

// =========================================================================
// API Router
// =========================================================================

/// Create the API router
pub fn create_router() -> Router<SharedAccount> {
    Router::new()
        .route("/balance", get(get_balance))
        .route("/add", put(add_transactions))
        .route("/spend", post(spend_points))
}

// =========================================================================
// GET /balance
// =========================================================================

/// Current balance per payer
async fn get_balance(State(account): State<SharedAccount>) -> Json<PointsByPayer> {
    let account = account.lock().await;
    Json(account.balance())
}

// =========================================================================
// PUT /add
// =========================================================================

/// Add a batch of transactions to the account.
///
/// Elements are applied in the order given; a failing negative entry aborts
/// the call with 405 while earlier elements stay applied.
async fn add_transactions(
    State(account): State<SharedAccount>,
    Json(transactions): Json<Vec<Transaction>>,
) -> AppResult<StatusCode> {
    let mut account = account.lock().await;
    account.add(transactions)?;
    Ok(StatusCode::CREATED)
}

// =========================================================================
// POST /spend
// =========================================================================

/// Spend points oldest-first across payers
async fn spend_points(
    State(account): State<SharedAccount>,
    Json(request): Json<SpendRequest>,
) -> AppResult<Json<PointsByPayer>> {
    if request.points <= 0 {
        return Err(AppError::InvalidRequest(format!(
            "points must be a positive integer (got {})",
            request.points
        )));
    }

    let mut account = account.lock().await;
    let summary = account.spend(request.points)?;
    Ok(Json(summary))
}
