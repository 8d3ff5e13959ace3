//! Reports API 模块 (管理员)

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/reports/inactive", get(handler::inactive))
        .route_layer(middleware::from_fn(require_admin))
}
