//! Club Attendance Server - 俱乐部出勤与入场费管理
//!
//! # 架构概述
//!
//! - **会员名册** (`members`): 注册、搜索、分页
//! - **出勤账本** (`ledger`): 每日出席者和缴费状态
//! - **出勤排行** (`ranking`): 时间窗口内的出勤次数，前 7 名标记
//! - **管理员** (`auth`): 共享密码 + JWT
//! - **报表** (`reports`): 未缴费、不活跃会员
//! - **HTTP API** (`api`): JSON 接口
//!
//! # 模块结构
//!
//! ```text
//! attendance-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── auth/          # JWT、管理员密码、中间件
//! ├── db/            # SQLite 连接池和 repository
//! ├── ledger/        # 出勤记录和账本服务
//! ├── ranking/       # 排行统计
//! ├── reports/       # 管理员报表
//! ├── api/           # HTTP 路由和处理器
//! ├── routes/        # 路由装配和中间件
//! └── utils/         # 日志、日期、校验
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod ledger;
pub mod members;
pub mod ranking;
pub mod reports;
pub mod routes;
pub mod utils;

// Re-export 公共类型
pub use auth::JwtService;
pub use crate::core::{Config, Server, ServerState};
pub use ledger::{AttendanceLedger, AttendanceRecord};
pub use routes::build_app;
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// 设置运行环境并加载配置
///
/// 1. 加载 `.env`
/// 2. 读取配置，创建工作目录和日志目录
/// 3. 初始化日志
pub fn setup_environment() -> std::io::Result<Config> {
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    std::fs::create_dir_all(&config.work_dir)?;
    std::fs::create_dir_all(&config.log_dir)?;

    init_logger_with_file(Some(&config.log_level), Some(&config.log_dir));
    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
    ___   __  __                 __
   /   | / /_/ /____  ____  ____/ /___ _____  ________
  / /| |/ __/ __/ _ \/ __ \/ __  / __ `/ __ \/ ___/ _ \
 / ___ / /_/ /_/  __/ / / / /_/ / /_/ / / / / /__/  __/
/_/  |_\__/\__/\___/_/ /_/\__,_/\__,_/_/ /_/\___/\___/
    "#
    );
}
