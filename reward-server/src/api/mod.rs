//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`users`] - 账户注册、查询和扫码匹配接口
//! - [`points`] - 积分账本接口 (accrue / redeem / 查询)
//! - [`redemptions`] - 兑换记录接口
//! - [`stats`] - 餐厅统计接口
//! - [`restaurants`] - 餐厅管理接口
//! - [`offers`] - 优惠管理接口
//! - [`sliders`] - 首页轮播图管理接口

pub mod health;
pub mod offers;
pub mod points;
pub mod redemptions;
pub mod restaurants;
pub mod sliders;
pub mod stats;
pub mod users;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};

/// Bare `{ "message": ... }` body used by the mutation endpoints
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
