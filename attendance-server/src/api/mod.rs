//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`admin`] - 管理员登录 / 会话
//! - [`members`] - 会员名册
//! - [`board`] - 今日签到板
//! - [`attendance`] - 出勤记录 (签到 / 签退 / 历史)
//! - [`ranking`] - 出勤排行
//! - [`payments`] - 入场费 (管理员)
//! - [`reports`] - 报表 (管理员)

pub mod admin;
pub mod attendance;
pub mod board;
pub mod health;
pub mod members;
pub mod payments;
pub mod ranking;
pub mod reports;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

use crate::core::ServerState;
use crate::db::repository::member;
use crate::utils::time;
use shared::models::Member;

/// 解析路径中的日期并规范化为 YYYY-MM-DD
pub(crate) fn date_param(raw: &str) -> AppResult<String> {
    time::normalize_date(raw)
}

/// 查找会员，不存在时返回 MemberNotFound
pub(crate) async fn require_member(state: &ServerState, id: i64) -> AppResult<Member> {
    member::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::member_not_found(id))
}
