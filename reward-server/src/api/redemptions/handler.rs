//! Redemption API Handlers
//!
//! The customer reward flow records redemption events here. This path only
//! appends history — the balance-checked decrement lives on the scanner's
//! points-update endpoint, and the two are kept separate deliberately.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use crate::api::MessageResponse;
use crate::core::ServerState;
use crate::db::repository::{ledger, user};
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{Redemption, RedemptionDetail, RedemptionRecord};

/// POST /api/users/redeem - 记录一次兑换（不检查余额）
pub async fn record(
    State(state): State<ServerState>,
    Json(payload): Json<RedemptionRecord>,
) -> AppResult<Json<MessageResponse>> {
    let user = user::find_by_email(&state.pool, &payload.user_email)
        .await?
        .ok_or_else(|| AppError::with_message(ErrorCode::UserNotFound, "User not found"))?;

    ledger::record_redemption(
        &state.pool,
        user.id,
        &payload.restaurant_name,
        payload.points,
        payload.description.as_deref(),
    )
    .await?;

    tracing::info!(
        user_id = user.id,
        restaurant = %payload.restaurant_name,
        points = payload.points,
        "Redemption recorded"
    );

    Ok(Json(MessageResponse::new("Redemption recorded successfully")))
}

#[derive(Debug, Deserialize)]
pub struct RedeemDetailsQuery {
    pub email: Option<String>,
    pub restaurant: Option<String>,
}

/// Per-user redemption history response
#[derive(Serialize)]
pub struct RedeemDetailsResponse {
    pub success: bool,
    pub email: String,
    pub restaurant: String,
    pub redemptions: Vec<Redemption>,
}

/// GET /api/users/redeem-details?email=&restaurant= - 单个用户的兑换历史
pub async fn redeem_details(
    State(state): State<ServerState>,
    Query(query): Query<RedeemDetailsQuery>,
) -> AppResult<Json<RedeemDetailsResponse>> {
    let (Some(email), Some(restaurant)) = (query.email, query.restaurant) else {
        return Err(AppError::with_message(
            ErrorCode::RequiredField,
            "Email and restaurant name are required.",
        ));
    };

    let user = user::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| AppError::with_message(ErrorCode::UserNotFound, "User not found."))?;

    let redemptions = ledger::redemptions_for_user(&state.pool, user.id, &restaurant).await?;

    Ok(Json(RedeemDetailsResponse {
        success: true,
        email,
        restaurant,
        redemptions,
    }))
}

/// GET /api/restaurant/{restaurant_name}/redemptions - 餐厅兑换表（最新在前）
pub async fn restaurant_redemptions(
    State(state): State<ServerState>,
    Path(restaurant_name): Path<String>,
) -> AppResult<Json<Vec<RedemptionDetail>>> {
    let redemptions = ledger::redemptions_for_restaurant(&state.pool, &restaurant_name).await?;
    Ok(Json(redemptions))
}
