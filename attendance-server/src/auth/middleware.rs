//! 认证中间件
//!
//! - [`authenticate`] 全局层：有 Bearer 令牌时验证，并把 [`Claims`] 注入请求扩展
//! - [`require_admin`] 路由层：要求令牌角色为 `admin`

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::auth::{Claims, CurrentAdmin, JwtService};
use crate::core::ServerState;
use crate::security_log;
use crate::utils::AppError;

/// 从请求头提取 Bearer 令牌
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(JwtService::extract_from_header)
}

/// 认证中间件 - 验证可选的 Bearer 令牌
///
/// 无令牌的请求直接放行 (公共接口)。
///
/// # 跳过认证的路径
///
/// - `OPTIONS *` (CORS 预检)
/// - 非 `/api/` 路径
/// - `/api/admin/*` (登录和会话检查自行处理令牌)
///
/// # 错误处理
///
/// | 错误 | HTTP 状态码 |
/// |------|------------|
/// | Authorization 头格式错误 | 401 TokenInvalid |
/// | 无效令牌 | 401 TokenInvalid |
pub async fn authenticate(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    if req.method() == http::Method::OPTIONS
        || !path.starts_with("/api/")
        || path.starts_with("/api/admin/")
    {
        return Ok(next.run(req).await);
    }

    let Some(header) = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
    else {
        return Ok(next.run(req).await);
    };

    let token = JwtService::extract_from_header(header)
        .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?;

    match state.get_jwt_service().validate_token(token) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            Ok(next.run(req).await)
        }
        Err(e) => {
            security_log!(
                "WARN",
                "auth_failed",
                error = format!("{}", e),
                uri = format!("{:?}", req.uri())
            );
            Err(AppError::invalid_token("Invalid token"))
        }
    }
}

/// 管理员中间件 - 要求管理员角色
///
/// 依赖 [`authenticate`] 注入的 [`Claims`]；通过后注入 [`CurrentAdmin`]。
///
/// # 错误
///
/// | 错误 | HTTP 状态码 |
/// |------|------------|
/// | 无令牌 | 401 NotAuthenticated |
/// | 非管理员角色 | 403 AdminRequired |
///
/// # 用法
///
/// ```ignore
/// Router::new()
///     .route("/unpaid", get(handler::unpaid))
///     .route_layer(middleware::from_fn(require_admin));
/// ```
pub async fn require_admin(mut req: Request, next: Next) -> Result<Response, AppError> {
    let Some(claims) = req.extensions().get::<Claims>().cloned() else {
        security_log!("WARN", "auth_missing", uri = format!("{:?}", req.uri()));
        return Err(AppError::not_authenticated());
    };

    if !claims.is_admin() {
        security_log!(
            "WARN",
            "admin_required",
            role = claims.role.clone(),
            uri = format!("{:?}", req.uri())
        );
        return Err(AppError::admin_required());
    }

    req.extensions_mut().insert(CurrentAdmin::from(claims));
    Ok(next.run(req).await)
}
