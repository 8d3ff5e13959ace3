//! Payments API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::date_param;
use crate::core::ServerState;
use crate::db::repository::member;
use crate::reports;
use crate::utils::AppResult;
use shared::models::{PaymentEntry, PaymentSheet, PaymentStatus, PaymentUpdate, UnpaidMember};

/// GET /api/payments/{date} - 指定日期出席者的缴费状态
///
/// 无记录时返回空列表。
pub async fn sheet(
    State(state): State<ServerState>,
    Path(date): Path<String>,
) -> AppResult<Json<PaymentSheet>> {
    let date = date_param(&date)?;
    let Some(record) = state.ledger.record(&date).await? else {
        return Ok(Json(PaymentSheet {
            date,
            entries: Vec::new(),
            paid_count: 0,
            total: 0,
        }));
    };

    let entries: Vec<PaymentEntry> = member::find_all(&state.pool)
        .await?
        .into_iter()
        .filter(|m| record.attended(m.id))
        .map(|m| PaymentEntry {
            paid: record.is_paid(m.id),
            member_id: m.id,
            name: m.name,
        })
        .collect();

    Ok(Json(PaymentSheet {
        date,
        paid_count: entries.iter().filter(|e| e.paid).count(),
        total: entries.len(),
        entries,
    }))
}

/// PUT /api/payments/{date}/members/{id} - 设置缴费状态
pub async fn set_paid(
    State(state): State<ServerState>,
    Path((date, member_id)): Path<(String, i64)>,
    Json(update): Json<PaymentUpdate>,
) -> AppResult<Json<PaymentStatus>> {
    let date = date_param(&date)?;
    state.ledger.set_paid(&date, member_id, update.paid).await?;
    let paid = state.ledger.is_paid(&date, member_id).await?;
    Ok(Json(PaymentStatus {
        date,
        member_id,
        paid,
    }))
}

/// POST /api/payments/{date}/members/{id}/toggle - 切换缴费状态
pub async fn toggle_paid(
    State(state): State<ServerState>,
    Path((date, member_id)): Path<(String, i64)>,
) -> AppResult<Json<PaymentStatus>> {
    let date = date_param(&date)?;
    let paid = state.ledger.toggle_paid(&date, member_id).await?;
    Ok(Json(PaymentStatus {
        date,
        member_id,
        paid,
    }))
}

/// GET /api/payments/unpaid - 未缴费报表
pub async fn unpaid(State(state): State<ServerState>) -> AppResult<Json<Vec<UnpaidMember>>> {
    let members = member::find_all(&state.pool).await?;
    let records = state.ledger.all_records().await?;
    Ok(Json(reports::unpaid_report(&members, &records)))
}
