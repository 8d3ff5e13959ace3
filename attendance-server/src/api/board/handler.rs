//! Check-in board Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::repository::member;
use crate::members::{self, DEFAULT_PER_PAGE};
use crate::ranking;
use crate::utils::AppResult;
use shared::models::{BoardEntry, CheckInBoard};

#[derive(Debug, Deserialize)]
pub struct BoardQuery {
    pub q: Option<String>,
    pub page: Option<usize>,
}

/// GET /api/board - 今日签到板
///
/// 无搜索词时每页 10 人；有搜索词时返回全部匹配。
pub async fn board(
    State(state): State<ServerState>,
    Query(query): Query<BoardQuery>,
) -> AppResult<Json<CheckInBoard>> {
    let today = state.today();
    let all = member::find_all(&state.pool).await?;
    let records = state.ledger.all_records().await?;

    let slots = ranking::highlight_slots(&records);
    let attended: Vec<i64> = records
        .iter()
        .find(|r| r.date == today)
        .map(|r| r.users.clone())
        .unwrap_or_default();

    let page = members::page(all, query.q.as_deref(), query.page.unwrap_or(1), DEFAULT_PER_PAGE);
    let entries = page
        .members
        .into_iter()
        .map(|m| BoardEntry {
            attended: attended.contains(&m.id),
            highlight: slots.get(&m.id).copied(),
            id: m.id,
            name: m.name,
        })
        .collect();

    Ok(Json(CheckInBoard {
        date: today,
        entries,
        page: page.page,
        total_pages: page.total_pages,
    }))
}
