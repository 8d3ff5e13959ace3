//! Attendance API Handlers

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::{date_param, require_member};
use crate::core::ServerState;
use crate::db::repository::member;
use crate::utils::AppResult;
use shared::models::{AttendanceDay, AttendanceStatus, Member};

/// 出席者排列顺序
#[derive(Clone, Copy)]
enum AttendeeOrder {
    /// 会员注册顺序
    Registry,
    /// 记录中 users 的顺序 (签到顺序)
    CheckIn,
}

/// 某日出席者 (已删除的会员跳过)
async fn attendance_day(
    state: &ServerState,
    date: String,
    order: AttendeeOrder,
) -> AppResult<AttendanceDay> {
    let users = state
        .ledger
        .record(&date)
        .await?
        .map(|r| r.users)
        .unwrap_or_default();
    let members = member::find_all(&state.pool).await?;

    let attendees: Vec<_> = match order {
        AttendeeOrder::Registry => members
            .into_iter()
            .filter(|m| users.contains(&m.id))
            .collect(),
        AttendeeOrder::CheckIn => {
            let mut by_id: HashMap<i64, Member> =
                members.into_iter().map(|m| (m.id, m)).collect();
            users.iter().filter_map(|id| by_id.remove(id)).collect()
        }
    };

    Ok(AttendanceDay {
        date,
        count: attendees.len(),
        attendees,
    })
}

/// GET /api/attendance/today - 今日出席者
pub async fn today(State(state): State<ServerState>) -> AppResult<Json<AttendanceDay>> {
    let today = state.today();
    Ok(Json(
        attendance_day(&state, today, AttendeeOrder::Registry).await?,
    ))
}

/// POST /api/attendance/today/{member_id} - 今日签到
pub async fn check_in_today(
    State(state): State<ServerState>,
    Path(member_id): Path<i64>,
) -> AppResult<Json<AttendanceStatus>> {
    require_member(&state, member_id).await?;
    let date = state.today();
    state.ledger.check_in(&date, member_id).await?;
    Ok(Json(AttendanceStatus {
        date,
        member_id,
        attended: true,
    }))
}

/// DELETE /api/attendance/today/{member_id} - 今日签退
pub async fn check_out_today(
    State(state): State<ServerState>,
    Path(member_id): Path<i64>,
) -> AppResult<Json<AttendanceStatus>> {
    let date = state.today();
    state.ledger.check_out(&date, member_id).await?;
    Ok(Json(AttendanceStatus {
        date,
        member_id,
        attended: false,
    }))
}

/// GET /api/attendance/dates - 所有记录日期 (新到旧)
pub async fn dates(State(state): State<ServerState>) -> AppResult<Json<Vec<String>>> {
    Ok(Json(state.ledger.dates().await?))
}

/// GET /api/attendance/{date} - 指定日期出席者 (签到顺序)
pub async fn by_date(
    State(state): State<ServerState>,
    Path(date): Path<String>,
) -> AppResult<Json<AttendanceDay>> {
    let date = date_param(&date)?;
    Ok(Json(
        attendance_day(&state, date, AttendeeOrder::CheckIn).await?,
    ))
}

/// GET /api/attendance/{date}/members/{id} - 是否出席
pub async fn status(
    State(state): State<ServerState>,
    Path((date, member_id)): Path<(String, i64)>,
) -> AppResult<Json<AttendanceStatus>> {
    let date = date_param(&date)?;
    let attended = state.ledger.attended(&date, member_id).await?;
    Ok(Json(AttendanceStatus {
        date,
        member_id,
        attended,
    }))
}

/// PUT /api/attendance/{date}/members/{id} - 手动签到
pub async fn manual_check_in(
    State(state): State<ServerState>,
    Path((date, member_id)): Path<(String, i64)>,
) -> AppResult<Json<AttendanceStatus>> {
    let date = date_param(&date)?;
    require_member(&state, member_id).await?;
    state.ledger.check_in(&date, member_id).await?;
    Ok(Json(AttendanceStatus {
        date,
        member_id,
        attended: true,
    }))
}

/// DELETE /api/attendance/{date}/members/{id} - 手动签退
pub async fn manual_check_out(
    State(state): State<ServerState>,
    Path((date, member_id)): Path<(String, i64)>,
) -> AppResult<Json<AttendanceStatus>> {
    let date = date_param(&date)?;
    state.ledger.check_out(&date, member_id).await?;
    Ok(Json(AttendanceStatus {
        date,
        member_id,
        attended: false,
    }))
}
