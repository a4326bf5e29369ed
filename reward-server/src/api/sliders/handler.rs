//! Slider API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::MessageResponse;
use crate::core::ServerState;
use crate::db::repository::slider;
use crate::utils::validation::{MAX_NAME_LEN, MAX_URL_LEN};
use crate::utils::{AppError, AppResult, ErrorCode, validation};
use shared::models::{Slider, SliderCreate, SliderType, SliderUpdate};

/// GET /api/sliders/{type} - 按位置取轮播图（排序后）
pub async fn list_by_type(
    State(state): State<ServerState>,
    Path(slider_type): Path<SliderType>,
) -> AppResult<Json<Vec<Slider>>> {
    let sliders = slider::find_by_type(&state.pool, slider_type).await?;
    Ok(Json(sliders))
}

/// POST /api/slider - 创建轮播图
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SliderCreate>,
) -> AppResult<(StatusCode, Json<Slider>)> {
    validation::validate_optional_text(&payload.title, "title", MAX_NAME_LEN)?;
    validation::validate_optional_text(&payload.image, "image", MAX_URL_LEN)?;

    let created = slider::create(&state.pool, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/slider/{id} - 更新轮播图
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<SliderUpdate>,
) -> AppResult<Json<Slider>> {
    validation::validate_optional_text(&payload.title, "title", MAX_NAME_LEN)?;
    validation::validate_optional_text(&payload.image, "image", MAX_URL_LEN)?;

    let updated = slider::update(&state.pool, id, payload).await?;
    Ok(Json(updated))
}

/// DELETE /api/slider/{id} - 删除轮播图
pub async fn delete_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    if !slider::delete(&state.pool, id).await? {
        return Err(AppError::new(ErrorCode::SliderNotFound));
    }
    Ok(Json(MessageResponse::new("Slider deleted")))
}
