//! Member Model (会员 / 出席者)

use serde::{Deserialize, Serialize};

/// Member entity
///
/// 注册后不可修改，只能删除。删除时从所有出勤记录中移除该 ID。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Member {
    pub id: i64,
    /// 唯一名称 (trim 后保存)
    pub name: String,
    /// 注册时间 (Unix millis)
    pub created_at: i64,
}

/// Register member payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberCreate {
    pub name: String,
    /// 注册后立即签到今天 (默认 true)
    #[serde(default = "default_check_in_today")]
    pub check_in_today: bool,
}

fn default_check_in_today() -> bool {
    true
}

/// Member list page (simple slice of the registry)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberPage {
    pub members: Vec<Member>,
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// Member detail: member + attendance history (newest first)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberDetail {
    #[serde(flatten)]
    pub member: Member,
    pub attendance_dates: Vec<String>,
    pub attendance_count: usize,
}
