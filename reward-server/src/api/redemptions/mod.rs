//! Redemption API 模块 (兑换记录)

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/users/redeem", post(handler::record))
        .route("/api/users/redeem-details", get(handler::redeem_details))
        .route(
            "/api/restaurant/{restaurant_name}/redemptions",
            get(handler::restaurant_redemptions),
        )
}
