//! Check-in board API 模块
//!
//! 今日签到页：会员列表 + 今日是否已签到 + 前 7 名颜色标记

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/board", get(handler::board))
}
