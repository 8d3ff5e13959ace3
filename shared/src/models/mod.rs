//! Data models
//!
//! Shared between attendance-server and the front-end (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! Member IDs are `i64` snowflakes.

pub mod admin;
pub mod attendance;
pub mod member;
pub mod ranking;

// Re-exports
pub use admin::*;
pub use attendance::*;
pub use member::*;
pub use ranking::*;
