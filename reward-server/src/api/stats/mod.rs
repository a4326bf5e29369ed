//! Statistics API 模块 (餐厅统计)

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/api/restaurant/{restaurant_name}/stats",
        get(handler::restaurant_stats),
    )
}
