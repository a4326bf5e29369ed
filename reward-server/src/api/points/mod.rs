//! Points Ledger API 模块 (积分)

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/user/points/{id}", put(handler::update_points))
        .route("/api/user/{user_name}/points", get(handler::user_points))
}
