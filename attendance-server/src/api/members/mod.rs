//! Member API 模块

mod handler;

use axum::{
    Router, middleware,
    routing::{delete, get},
};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/members", routes())
}

fn routes() -> Router<ServerState> {
    // 公共路由：注册、列表、详情
    let public_routes = Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", get(handler::get_by_id));

    // 管理路由：删除会员
    let admin_routes = Router::new()
        .route("/{id}", delete(handler::delete))
        .route_layer(middleware::from_fn(require_admin));

    public_routes.merge(admin_routes)
}
