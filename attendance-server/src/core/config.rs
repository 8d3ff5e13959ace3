use std::path::PathBuf;

use chrono::{FixedOffset, Offset, Utc};

use crate::auth::JwtConfig;

/// 默认管理员密码 (与前端默认值一致)
pub const DEFAULT_ADMIN_PASSWORD: &str = "1234";

/// 默认业务时区 UTC+9
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 9;

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | DATABASE_PATH | {WORK_DIR}/database/attendance.db | SQLite 文件 |
/// | ADMIN_PASSWORD | 1234 | 管理员共享密码 |
/// | UTC_OFFSET_HOURS | 9 | 业务时区 (固定偏移) |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | {WORK_DIR}/logs | 日志目录 (存在时写入文件) |
///
/// JWT_SECRET / JWT_ISSUER / JWT_AUDIENCE 见 [`JwtConfig`]。
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/srv/club HTTP_PORT=8080 ADMIN_PASSWORD=s3cret cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库、日志等文件
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// SQLite 数据库文件路径
    pub database_path: String,
    /// 管理员共享密码
    pub admin_password: String,
    /// 业务时区偏移 (小时)
    pub utc_offset_hours: i32,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 日志级别
    pub log_level: String,
    /// 日志目录
    pub log_dir: String,
    /// JWT 认证配置
    pub jwt: JwtConfig,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        let work_dir = std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into());
        let database_path = std::env::var("DATABASE_PATH").unwrap_or_else(|_| {
            PathBuf::from(&work_dir)
                .join("database")
                .join("attendance.db")
                .to_string_lossy()
                .into_owned()
        });
        let log_dir = std::env::var("LOG_DIR").unwrap_or_else(|_| {
            PathBuf::from(&work_dir)
                .join("logs")
                .to_string_lossy()
                .into_owned()
        });

        let utc_offset_hours = std::env::var("UTC_OFFSET_HOURS")
            .ok()
            .and_then(|v| v.parse::<i32>().ok())
            .filter(|h| offset_from_hours(*h).is_some())
            .unwrap_or(DEFAULT_UTC_OFFSET_HOURS);

        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_path,
            admin_password: std::env::var("ADMIN_PASSWORD")
                .ok()
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.into()),
            utc_offset_hours,
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir,
            jwt: JwtConfig::default(),
            work_dir,
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config.database_path = PathBuf::from(&config.work_dir)
            .join("database")
            .join("attendance.db")
            .to_string_lossy()
            .into_owned();
        config.log_dir = PathBuf::from(&config.work_dir)
            .join("logs")
            .to_string_lossy()
            .into_owned();
        config
    }

    /// 业务时区
    pub fn utc_offset(&self) -> FixedOffset {
        offset_from_hours(self.utc_offset_hours).unwrap_or_else(|| Utc.fix())
    }

    /// 数据库目录
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.database_path)
            .parent()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(&self.work_dir))
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn offset_from_hours(hours: i32) -> Option<FixedOffset> {
    hours
        .checked_mul(3600)
        .and_then(FixedOffset::east_opt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_derive_paths_from_work_dir() {
        let config = Config::with_overrides("/tmp/club", 4000);
        assert_eq!(config.http_port, 4000);
        assert!(config.database_path.ends_with("attendance.db"));
        assert!(config.database_path.starts_with("/tmp/club"));
        assert!(config.database_dir().ends_with("database"));
    }

    #[test]
    fn test_offset_bounds() {
        assert!(offset_from_hours(9).is_some());
        assert!(offset_from_hours(-12).is_some());
        assert!(offset_from_hours(30).is_none());
    }
}
