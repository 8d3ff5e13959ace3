//! Admin Gate Handlers

use axum::{Json, extract::State, http::HeaderMap};

use crate::auth::bearer_token;
use crate::core::ServerState;
use crate::security_log;
use crate::utils::validation::MAX_PASSWORD_LEN;
use crate::utils::{AppError, AppResult};
use shared::models::{AdminLoginRequest, AdminLoginResponse, AdminSession};

/// POST /api/admin/login - 共享密码登录
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<AdminLoginRequest>,
) -> AppResult<Json<AdminLoginResponse>> {
    if req.password.len() > MAX_PASSWORD_LEN || !state.admin_gate.verify(&req.password) {
        security_log!("WARN", "admin_login_failed", password_len = req.password.len());
        return Err(AppError::invalid_credentials());
    }

    let token = state
        .get_jwt_service()
        .generate_admin_token()
        .map_err(|e| AppError::internal(format!("Failed to issue admin token: {e}")))?;

    security_log!("INFO", "admin_login", issuer = state.config.jwt.issuer.clone());
    Ok(Json(AdminLoginResponse { token }))
}

/// GET /api/admin/session - 当前令牌是否为有效管理员令牌
pub async fn session(State(state): State<ServerState>, headers: HeaderMap) -> Json<AdminSession> {
    let is_admin = bearer_token(&headers)
        .and_then(|token| state.get_jwt_service().validate_token(token).ok())
        .is_some_and(|claims| claims.is_admin());
    Json(AdminSession { is_admin })
}
