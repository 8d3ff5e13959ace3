//! Shared types for the club attendance service
//!
//! Common types used by the server and its API clients: models, the unified
//! error system, response structures, and utility functions.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::Json;
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use http;
pub use serde::{Deserialize, Serialize};
