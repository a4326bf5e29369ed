//! Offer API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::api::MessageResponse;
use crate::core::ServerState;
use crate::db::repository::offer;
use crate::utils::validation::{MAX_DESCRIPTION_LEN, MAX_NAME_LEN};
use crate::utils::{AppError, AppResult, ErrorCode, validation};
use shared::models::{Offer, OfferCreate, OfferUpdate};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferQuery {
    pub restaurant_name: Option<String>,
}

/// GET /api/offers?restaurantName= - 优惠列表（可按餐厅过滤）
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<OfferQuery>,
) -> AppResult<Json<Vec<Offer>>> {
    let offers = offer::find_all(&state.pool, query.restaurant_name.as_deref()).await?;
    Ok(Json(offers))
}

/// GET /api/offers/{id} - 单个优惠
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Offer>> {
    let offer = offer::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::OfferNotFound))?;
    Ok(Json(offer))
}

/// POST /api/offers - 创建优惠
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OfferCreate>,
) -> AppResult<(StatusCode, Json<Offer>)> {
    validation::validate_required_text(&payload.title, "title", MAX_NAME_LEN)?;
    validation::validate_required_text(&payload.description, "description", MAX_DESCRIPTION_LEN)?;
    validation::validate_required_text(&payload.restaurant_name, "restaurantName", MAX_NAME_LEN)?;

    let created = offer::create(&state.pool, payload).await?;
    tracing::info!(offer_id = created.id, title = %created.title, "Offer created");

    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/offers/{id} - 更新优惠
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<OfferUpdate>,
) -> AppResult<Json<Offer>> {
    validation::validate_optional_text(&payload.title, "title", MAX_NAME_LEN)?;
    validation::validate_optional_text(&payload.description, "description", MAX_DESCRIPTION_LEN)?;

    let updated = offer::update(&state.pool, id, payload).await?;
    Ok(Json(updated))
}

/// DELETE /api/offers/{id} - 删除优惠
pub async fn delete_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    if !offer::delete(&state.pool, id).await? {
        return Err(AppError::new(ErrorCode::OfferNotFound));
    }
    Ok(Json(MessageResponse::new("Offer deleted successfully")))
}
