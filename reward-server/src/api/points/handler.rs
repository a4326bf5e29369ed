//! Points Ledger API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use std::collections::HashMap;

use crate::core::ServerState;
use crate::db::repository::{ledger, user};
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{PointsUpdate, UserDocument};

/// Points-update response: message plus the full updated customer document
#[derive(serde::Serialize)]
pub struct PointsUpdateResponse {
    pub message: String,
    pub customer: UserDocument,
}

fn missing_fields() -> AppError {
    AppError::with_message(
        ErrorCode::RequiredField,
        "Points and restaurant name are required",
    )
}

/// PUT /api/user/points/{id} - 积分累加 / 扣减（扫码端）
///
/// Body: `{ "availablePoints": [{ "points": n, "restaurantName": s }], "type": "add"|"redeem" }`.
/// `add` accrues onto the (user, restaurant) balance; `redeem` is a
/// balance-checked decrement that writes no history record.
pub async fn update_points(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<PointsUpdate>,
) -> AppResult<Json<PointsUpdateResponse>> {
    let entry = payload
        .available_points
        .first()
        .cloned()
        .ok_or_else(missing_fields)?;
    let (Some(points), Some(restaurant_name)) = (entry.points, entry.restaurant_name) else {
        return Err(missing_fields());
    };
    if points <= 0 {
        return Err(AppError::new(ErrorCode::AmountNotPositive));
    }

    let user = user::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::with_message(ErrorCode::UserNotFound, "Customer not found"))?;

    let message = match payload.tx_type.as_deref() {
        Some("add") => {
            ledger::accrue(&state.pool, user.id, &restaurant_name, points).await?;
            "Points added successfully"
        }
        Some("redeem") => {
            ledger::redeem(&state.pool, user.id, &restaurant_name, points).await?;
            "Points redeemed successfully"
        }
        _ => return Err(AppError::new(ErrorCode::InvalidTransactionType)),
    };

    tracing::info!(
        user_id = user.id,
        restaurant = %restaurant_name,
        points,
        tx = payload.tx_type.as_deref().unwrap_or(""),
        "Points updated"
    );

    let customer = user::load_document(&state.pool, user).await?;
    Ok(Json(PointsUpdateResponse {
        message: message.to_string(),
        customer,
    }))
}

/// GET /api/user/{user_name}/points - 按餐厅聚合的余额映射
///
/// Returns `{ "<restaurantName>": balance, ... }`. Lookup is by user name,
/// which is how the customer dashboard addresses it.
pub async fn user_points(
    State(state): State<ServerState>,
    Path(user_name): Path<String>,
) -> AppResult<Json<HashMap<String, i64>>> {
    let user = user::find_by_name(&state.pool, &user_name)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::UserNotFound))?;

    let balances = ledger::balances_for_user(&state.pool, user.id).await?;
    Ok(Json(
        balances
            .into_iter()
            .map(|b| (b.restaurant_name, b.points))
            .collect(),
    ))
}
