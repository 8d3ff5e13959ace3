//! Ranking API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::repository::member;
use crate::ranking;
use crate::utils::time::{self, format_date};
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{HighlightEntry, RankingResponse, RankingWindow};

#[derive(Debug, Deserialize)]
pub struct RankingQuery {
    /// all | 7days | 30days (默认 all)
    pub window: Option<String>,
}

/// GET /api/ranking?window= - 出勤排行
pub async fn ranking(
    State(state): State<ServerState>,
    Query(query): Query<RankingQuery>,
) -> AppResult<Json<RankingResponse>> {
    let window = match query.window.as_deref() {
        None | Some("") => RankingWindow::default(),
        Some(raw) => raw.parse::<RankingWindow>().map_err(|msg| {
            AppError::with_message(ErrorCode::InvalidRankingWindow, msg).with_detail("window", raw)
        })?,
    };

    let today = time::business_today(state.utc_offset());
    let since = window.lower_bound(today).map(format_date);

    let records = state.ledger.records_since(since.as_deref()).await?;
    let members = member::find_all(&state.pool).await?;
    let entries = ranking::rank(&records, since.as_deref(), &members);

    Ok(Json(RankingResponse {
        window,
        since,
        entries,
    }))
}

/// GET /api/ranking/top - 全时段前 7 名及颜色位置
pub async fn top(State(state): State<ServerState>) -> AppResult<Json<Vec<HighlightEntry>>> {
    let records = state.ledger.all_records().await?;
    Ok(Json(ranking::highlights(&records)))
}
