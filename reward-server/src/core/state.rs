use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;

/// 服务器状态 - 持有配置和数据库连接池
///
/// ServerState 是 handler 层的共享状态。SqlitePool 内部是 Arc 引用计数，
/// Clone 成本极低。
///
/// # 使用示例
///
/// ```ignore
/// let users = user::find_all(&state.pool).await?;
/// ```
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// SQLite 连接池
    pub pool: SqlitePool,
    /// 启动时间 (毫秒时间戳，用于 /health 的 uptime)
    pub started_at: i64,
}

impl ServerState {
    /// 创建服务器状态 (手动构造，测试常用)
    pub fn new(config: Config, pool: SqlitePool) -> Self {
        Self {
            config,
            pool,
            started_at: shared::util::now_millis(),
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构 (确保目录存在)
    /// 2. 数据库 (work_dir/database/onereward.db)
    ///
    /// # Panics
    ///
    /// 数据库初始化失败时 panic
    pub async fn initialize(config: &Config) -> Self {
        // 0. Ensure work_dir structure exists
        config
            .ensure_work_dir_structure()
            .expect("Failed to create work directory structure");

        // 1. Initialize DB
        let db_path = config.database_dir().join("onereward.db");
        let db_path_str = db_path.to_string_lossy();

        let db_service = DbService::new(&db_path_str, config.db_max_connections)
            .await
            .expect("Failed to initialize database");

        Self::new(config.clone(), db_service.pool)
    }

    /// 运行时长（秒）
    pub fn uptime_secs(&self) -> i64 {
        (shared::util::now_millis() - self.started_at) / 1000
    }
}
