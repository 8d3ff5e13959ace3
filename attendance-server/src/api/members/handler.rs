//! Member API Handlers

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::api::require_member;
use crate::auth::CurrentAdmin;
use crate::core::ServerState;
use crate::db::repository::member;
use crate::members;
use crate::utils::{AppError, AppResult};
use shared::models::{Member, MemberCreate, MemberDetail, MemberPage};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// 名称搜索 (大小写不敏感)
    pub q: Option<String>,
    /// 页码 (1 起)；缺省返回全部
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

/// GET /api/members - 会员列表 (注册顺序)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<MemberPage>> {
    let all = member::find_all(&state.pool).await?;
    let per_page = match query.page {
        Some(_) => query.per_page.unwrap_or(members::DEFAULT_PER_PAGE),
        // 不分页：一页装下全部
        None => all.len().max(1),
    };
    Ok(Json(members::page(
        all,
        query.q.as_deref(),
        query.page.unwrap_or(1),
        per_page,
    )))
}

/// POST /api/members - 注册会员 (默认同时签到今天)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MemberCreate>,
) -> AppResult<Json<Member>> {
    let today = state.today();
    let check_in_on = payload.check_in_today.then_some(today.as_str());
    let created = members::register(&state.pool, &state.ledger, &payload.name, check_in_on).await?;
    Ok(Json(created))
}

/// GET /api/members/{id} - 会员详情 + 出勤历史
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MemberDetail>> {
    let member = require_member(&state, id).await?;
    let attendance_dates = state.ledger.history(id).await?;
    Ok(Json(MemberDetail {
        attendance_count: attendance_dates.len(),
        member,
        attendance_dates,
    }))
}

/// DELETE /api/members/{id} - 删除会员并从所有出勤记录中移除
pub async fn delete(
    State(state): State<ServerState>,
    Extension(admin): Extension<CurrentAdmin>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    if !state.ledger.purge_member(id).await? {
        return Err(AppError::member_not_found(id));
    }
    tracing::info!(member_id = id, token_issued_at = admin.issued_at, "Member deleted by admin");
    Ok(Json(true))
}
