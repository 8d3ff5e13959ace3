//! Payments API 模块 (管理员)

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/payments", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/unpaid", get(handler::unpaid))
        .route("/{date}", get(handler::sheet))
        .route("/{date}/members/{id}", put(handler::set_paid))
        .route("/{date}/members/{id}/toggle", post(handler::toggle_paid))
        .route_layer(middleware::from_fn(require_admin))
}
