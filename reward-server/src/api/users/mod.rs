//! User API 模块 (账户)

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/users/register", post(handler::register))
        .route("/api/users", get(handler::list))
        .route("/api/user-data/{email}", get(handler::user_data))
        .route("/api/user-qr/{email}", get(handler::user_qr))
        .route("/api/customer/by-phone/{phone}", get(handler::by_phone))
        .route("/api/customer/scan-qr", post(handler::scan_qr))
}
