//! Repository Module
//!
//! SQLite access for the `member` and `attendance` tables.
//! Repositories are free functions over a pool or any SQLite executor,
//! so the same call works inside a transaction.

pub mod attendance;
pub mod member;

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    /// 唯一约束冲突 (member.name)
    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    /// 文档字段无法解析 (users / paid 不是合法 JSON)
    #[error("Malformed record: {0}")]
    Malformed(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err
            && db_err.is_unique_violation()
        {
            return RepoError::Duplicate(db_err.message().to_string());
        }
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::MemberNameExists, msg),
            RepoError::Malformed(msg) => AppError::with_message(ErrorCode::MalformedRecord, msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
