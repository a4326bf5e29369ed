//! Slider API 模块 (首页轮播图)

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/sliders/{slider_type}", get(handler::list_by_type))
        .route("/api/slider", post(handler::create))
        .route(
            "/api/slider/{id}",
            put(handler::update).delete(handler::delete_by_id),
        )
}
