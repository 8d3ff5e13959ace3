//! Attendance API 模块
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /api/attendance/today | GET | 今日出席者 | 无 |
//! | /api/attendance/today/{member_id} | POST / DELETE | 今日签到 / 签退 | 无 |
//! | /api/attendance/dates | GET | 所有记录日期 | 管理员 |
//! | /api/attendance/{date} | GET | 指定日期出席者 | 无 |
//! | /api/attendance/{date}/members/{id} | GET / PUT / DELETE | 手动出勤 | 管理员 |

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/attendance", routes())
}

fn routes() -> Router<ServerState> {
    let public_routes = Router::new()
        .route("/today", get(handler::today))
        .route(
            "/today/{member_id}",
            post(handler::check_in_today).delete(handler::check_out_today),
        )
        .route("/{date}", get(handler::by_date));

    let admin_routes = Router::new()
        .route("/dates", get(handler::dates))
        .route(
            "/{date}/members/{id}",
            get(handler::status)
                .put(handler::manual_check_in)
                .delete(handler::manual_check_out),
        )
        .route_layer(middleware::from_fn(require_admin));

    public_routes.merge(admin_routes)
}
