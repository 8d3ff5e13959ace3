//! 管理员认证模块
//!
//! 单一共享密码 + JWT 令牌：
//! - [`JwtService`] - 令牌签发和验证
//! - [`AdminGate`] - 共享密码校验 (argon2)
//! - [`authenticate`] - 令牌验证中间件
//! - [`require_admin`] - 管理员中间件

pub mod gate;
pub mod jwt;
pub mod middleware;

pub use gate::AdminGate;
pub use jwt::{ADMIN_ROLE, Claims, CurrentAdmin, JwtConfig, JwtError, JwtService};
pub use middleware::{authenticate, bearer_token, require_admin};
