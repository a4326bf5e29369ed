//! Restaurant API 模块 (餐厅管理)

mod handler;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/restaurants/create", post(handler::create))
        .route("/api/restaurants", get(handler::list))
        .route("/api/restaurants/{id}", get(handler::get_by_id))
        .route("/api/restaurants/update/{id}", put(handler::update))
        .route("/api/restaurants/delete/{id}", delete(handler::delete_by_id))
        .route(
            "/api/restaurant/{restaurant_name}/customers",
            get(handler::customers),
        )
        // Card image by id and by name. The segment name must match the other
        // /api/restaurant/{restaurant_name}/* routes or the router rejects it.
        .route(
            "/api/restaurant/{restaurant_name}/card-image",
            get(handler::card_image).put(handler::update_card_image),
        )
        .route(
            "/api/restaurant/by-name/{name}/card-image",
            get(handler::card_image_by_name).put(handler::update_card_image_by_name),
        )
}
