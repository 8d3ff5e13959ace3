use std::sync::Arc;

use chrono::FixedOffset;
use sqlx::SqlitePool;

use crate::auth::{AdminGate, JwtService};
use crate::core::{Config, Result};
use crate::db::DbService;
use crate::ledger::AttendanceLedger;
use crate::utils::time;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc / 连接池实现浅拷贝，每个请求 clone 一次。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | pool | SqlitePool | 会员 / 出勤数据库 |
/// | ledger | AttendanceLedger | 出勤账本 (串行写入) |
/// | jwt_service | Arc<JwtService> | 管理员令牌服务 |
/// | admin_gate | AdminGate | 共享密码 (argon2 哈希) |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// SQLite 连接池
    pub pool: SqlitePool,
    /// 出勤账本
    pub ledger: AttendanceLedger,
    /// JWT 认证服务 (Arc 共享所有权)
    pub jwt_service: Arc<JwtService>,
    /// 管理员密码
    pub admin_gate: AdminGate,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 代替
    pub fn new(config: Config, pool: SqlitePool) -> Result<Self> {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let ledger = AttendanceLedger::new(pool.clone());
        let admin_gate = AdminGate::new(&config.admin_password)?;
        Ok(Self {
            config,
            pool,
            ledger,
            jwt_service,
            admin_gate,
        })
    }

    /// 初始化服务器状态
    ///
    /// 1. 创建数据库目录
    /// 2. 打开 SQLite (WAL) 并执行迁移
    /// 3. 构造账本、JWT 服务和密码哈希
    pub async fn initialize(config: &Config) -> Result<Self> {
        std::fs::create_dir_all(config.database_dir())?;
        let db = DbService::new(&config.database_path).await?;
        Self::new(config.clone(), db.pool)
    }

    /// 使用内存数据库初始化 (测试用)
    pub async fn in_memory(config: Config) -> Result<Self> {
        let db = DbService::in_memory().await?;
        Self::new(config, db.pool)
    }

    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    /// 业务时区
    pub fn utc_offset(&self) -> FixedOffset {
        self.config.utc_offset()
    }

    /// 业务时区的今天 (YYYY-MM-DD)
    pub fn today(&self) -> String {
        time::business_today_key(self.utc_offset())
    }
}
