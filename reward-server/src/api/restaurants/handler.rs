//! Restaurant API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::api::MessageResponse;
use crate::core::ServerState;
use crate::db::repository::restaurant;
use crate::utils::validation::{MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_URL_LEN};
use crate::utils::{AppError, AppResult, ErrorCode, validation};
use shared::models::{Restaurant, RestaurantCreate, RestaurantCustomer, RestaurantUpdate};

/// POST /api/restaurants/create - 创建餐厅
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<RestaurantCreate>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    validation::validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validation::validate_required_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validation::validate_optional_text(&payload.city, "city", MAX_NAME_LEN)?;

    if restaurant::find_by_email(&state.pool, &payload.email)
        .await?
        .is_some()
    {
        return Err(AppError::new(ErrorCode::RestaurantEmailExists));
    }

    let created = restaurant::create(&state.pool, payload).await?;
    tracing::info!(restaurant_id = created.id, name = %created.name, "Restaurant created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Restaurant created successfully")),
    ))
}

/// GET /api/restaurants - 所有餐厅（最新在前）
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Restaurant>>> {
    let restaurants = restaurant::find_all(&state.pool).await?;
    Ok(Json(restaurants))
}

/// GET /api/restaurants/{id} - 单个餐厅
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Restaurant>> {
    let restaurant = restaurant::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::RestaurantNotFound))?;
    Ok(Json(restaurant))
}

/// Update response: message plus the updated document
#[derive(Serialize)]
pub struct RestaurantUpdateResponse {
    pub message: String,
    pub restaurant: Restaurant,
}

/// PUT /api/restaurants/update/{id} - 更新餐厅
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<RestaurantUpdate>,
) -> AppResult<Json<RestaurantUpdateResponse>> {
    validation::validate_optional_text(&payload.name, "name", MAX_NAME_LEN)?;
    validation::validate_optional_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validation::validate_optional_text(&payload.city, "city", MAX_NAME_LEN)?;

    let updated = restaurant::update(&state.pool, id, payload).await?;

    Ok(Json(RestaurantUpdateResponse {
        message: "Restaurant updated successfully".to_string(),
        restaurant: updated,
    }))
}

/// DELETE /api/restaurants/delete/{id} - 删除餐厅
pub async fn delete_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    if !restaurant::delete(&state.pool, id).await? {
        return Err(AppError::new(ErrorCode::RestaurantNotFound));
    }
    tracing::info!(restaurant_id = id, "Restaurant deleted");
    Ok(Json(MessageResponse::new("Restaurant deleted successfully")))
}

/// GET /api/restaurant/{restaurant_name}/customers - 持有积分的客户列表
pub async fn customers(
    State(state): State<ServerState>,
    Path(restaurant_name): Path<String>,
) -> AppResult<Json<Vec<RestaurantCustomer>>> {
    let customers = restaurant::customers_for(&state.pool, &restaurant_name).await?;
    Ok(Json(customers))
}

// ── Card image management ───────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardImagePayload {
    pub card_image: Option<String>,
}

/// Card image response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardImageResponse {
    pub card_image: Option<String>,
}

/// GET /api/restaurant/{id}/card-image - 卡片背景图
pub async fn card_image(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<CardImageResponse>> {
    let restaurant = restaurant::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::RestaurantNotFound))?;
    Ok(Json(CardImageResponse {
        card_image: restaurant.card_image,
    }))
}

/// Card image update response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardImageUpdateResponse {
    pub message: String,
    pub card_image: Option<String>,
}

/// PUT /api/restaurant/{id}/card-image - 更新卡片背景图
pub async fn update_card_image(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<CardImagePayload>,
) -> AppResult<Json<CardImageUpdateResponse>> {
    validation::validate_optional_text(&payload.card_image, "cardImage", MAX_URL_LEN)?;

    let updated =
        restaurant::update_card_image(&state.pool, id, payload.card_image.as_deref()).await?;

    Ok(Json(CardImageUpdateResponse {
        message: "Card image updated successfully".to_string(),
        card_image: updated.card_image,
    }))
}

/// Card image by-name response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardImageByNameResponse {
    pub name: String,
    pub card_image: Option<String>,
}

/// GET /api/restaurant/by-name/{name}/card-image - 按名称取卡片背景图（客户端）
pub async fn card_image_by_name(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> AppResult<Json<CardImageByNameResponse>> {
    let restaurant = restaurant::find_by_name(&state.pool, &name)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::RestaurantNotFound))?;
    Ok(Json(CardImageByNameResponse {
        name: restaurant.name,
        card_image: restaurant.card_image,
    }))
}

/// PUT /api/restaurant/by-name/{name}/card-image - 按名称更新卡片背景图（餐厅端）
pub async fn update_card_image_by_name(
    State(state): State<ServerState>,
    Path(name): Path<String>,
    Json(payload): Json<CardImagePayload>,
) -> AppResult<Json<CardImageUpdateResponse>> {
    validation::validate_optional_text(&payload.card_image, "cardImage", MAX_URL_LEN)?;

    let restaurant = restaurant::find_by_name(&state.pool, &name)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::RestaurantNotFound))?;

    let updated =
        restaurant::update_card_image(&state.pool, restaurant.id, payload.card_image.as_deref())
            .await?;

    Ok(Json(CardImageUpdateResponse {
        message: "Card image updated successfully".to_string(),
        card_image: updated.card_image,
    }))
}
