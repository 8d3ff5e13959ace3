//! Reports API Handlers

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::date_param;
use crate::core::ServerState;
use crate::db::repository::member;
use crate::reports::{self, InactiveFilter};
use crate::utils::AppResult;
use shared::models::InactiveMember;

/// GET /api/reports/inactive?cutoff=YYYY-MM-DD&max_attendance=N - 不活跃会员
pub async fn inactive(
    State(state): State<ServerState>,
    Query(mut filter): Query<InactiveFilter>,
) -> AppResult<Json<Vec<InactiveMember>>> {
    filter.cutoff = match filter.cutoff.as_deref() {
        Some(cutoff) if !cutoff.is_empty() => Some(date_param(cutoff)?),
        _ => None,
    };

    let members = member::find_all(&state.pool).await?;
    let records = state.ledger.all_records().await?;
    Ok(Json(reports::inactive_members(&members, &records, &filter)))
}
