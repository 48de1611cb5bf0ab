use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// 服务器状态 - 持有所有服务的共享引用
///
/// ServerState is the axum state for every handler; it is `Clone` via
/// `Arc`/handle semantics so shallow copies are cheap.
#[derive(Clone)]
pub struct ServerState {
    /// 配置项 (不可变)
    pub config: Arc<Config>,
    /// 嵌入式数据库连接
    pub db: Surreal<Db>,
}

impl ServerState {
    /// 初始化服务器状态 (打开数据库)
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db_service = DbService::new(&config.db_path()).await?;
        Ok(Self {
            config: Arc::new(config.clone()),
            db: db_service.db,
        })
    }

}
