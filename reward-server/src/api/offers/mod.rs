//! Offer API 模块 (优惠管理)

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/offers", get(handler::list).post(handler::create))
        .route(
            "/api/offers/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete_by_id),
        )
}
