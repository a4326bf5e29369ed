//! OneReward Server - 餐厅积分奖励平台后端
//!
//! # 架构概述
//!
//! REST backend for the OneReward loyalty platform: customers collect points
//! per restaurant via QR scans and redeem them against offers, managed
//! through the admin / restaurant / scanner dashboards.
//!
//! # 模块结构
//!
//! ```text
//! reward-server/src/
//! ├── core/          # 配置、状态、HTTP 服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (SQLite + repositories)
//! └── utils/         # 日志、校验等工具
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use crate::core::server::build_app;
pub use crate::core::{Config, Server, ServerState};
pub use crate::db::DbService;
pub use crate::utils::{AppError, AppResult};

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境 (dotenv + 日志)
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   ____             ____                             __
  / __ \____  ___  / __ \___ _      ______ _________/ /
 / / / / __ \/ _ \/ /_/ / _ \ | /| / / __ `/ ___/ __  /
/ /_/ / / / /  __/ _, _/  __/ |/ |/ / /_/ / /  / /_/ /
\____/_/ /_/\___/_/ |_|\___/|__/|__/\__,_/_/   \__,_/
    "#
    );
}
