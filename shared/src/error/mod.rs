//! Unified error system for the attendance service
//!
//! This module provides the error handling system shared by the server and
//! its API clients:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: JSON error body `{ code, message, details }`
//!
//! # Error Code Ranges
//!
//! - 1xxx: Admin gate
//! - 2xxx: Permission
//! - 3xxx: Member registry
//! - 4xxx: Attendance ledger
//! - 9xxx: System
//!
//! # Example
//!
//! ```
//! use shared::error::{ApiResponse, AppError, ErrorCode};
//!
//! let err = AppError::with_message(ErrorCode::MemberNameEmpty, "Name must not be empty")
//!     .with_detail("field", "name");
//!
//! let body = ApiResponse::from(&err);
//! assert_eq!(body.code.code(), 3003);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
