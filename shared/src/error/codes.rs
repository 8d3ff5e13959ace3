//! Error codes for the attendance service
//!
//! Codes are shared with the browser front-end and grouped by range:
//! - 1xxx: Admin gate (authentication)
//! - 2xxx: Permission
//! - 3xxx: Member registry
//! - 4xxx: Attendance / payment ledger
//! - 9xxx: System

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code carried in every error body as a `u16`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 1xxx: Auth ====================
    /// Admin route called without a token
    NotAuthenticated = 1001,
    /// Admin password mismatch
    InvalidCredentials = 1002,
    /// Admin token is invalid
    TokenInvalid = 1004,

    // ==================== 2xxx: Permission ====================
    /// Token is valid but does not carry the admin role
    AdminRequired = 2003,

    // ==================== 3xxx: Member ====================
    /// Member not found
    MemberNotFound = 3001,
    /// A member with this name is already registered
    MemberNameExists = 3002,
    /// Member name is empty after trimming
    MemberNameEmpty = 3003,

    // ==================== 4xxx: Attendance ====================
    /// Date is not a valid `YYYY-MM-DD` calendar date
    InvalidDate = 4001,
    /// Unknown ranking window
    InvalidRankingWindow = 4002,
    /// Stored attendance document could not be decoded
    MalformedRecord = 4003,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default message for this code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::NotAuthenticated => "Admin login required",
            ErrorCode::InvalidCredentials => "Invalid password",
            ErrorCode::TokenInvalid => "Admin token is invalid",
            ErrorCode::AdminRequired => "Administrator role is required",
            ErrorCode::MemberNotFound => "Member not found",
            ErrorCode::MemberNameExists => "Name is already registered",
            ErrorCode::MemberNameEmpty => "Name must not be empty",
            ErrorCode::InvalidDate => "Invalid date, expected YYYY-MM-DD",
            ErrorCode::InvalidRankingWindow => "Invalid ranking window",
            ErrorCode::MalformedRecord => "Attendance record is malformed",
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an unknown u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1004 => Ok(ErrorCode::TokenInvalid),
            2003 => Ok(ErrorCode::AdminRequired),
            3001 => Ok(ErrorCode::MemberNotFound),
            3002 => Ok(ErrorCode::MemberNameExists),
            3003 => Ok(ErrorCode::MemberNameEmpty),
            4001 => Ok(ErrorCode::InvalidDate),
            4002 => Ok(ErrorCode::InvalidRankingWindow),
            4003 => Ok(ErrorCode::MalformedRecord),
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::InvalidCredentials.code(), 1002);
        assert_eq!(ErrorCode::AdminRequired.code(), 2003);
        assert_eq!(ErrorCode::MemberNameExists.code(), 3002);
        assert_eq!(ErrorCode::InvalidDate.code(), 4001);
        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
    }

    #[test]
    fn test_try_from() {
        assert_eq!(ErrorCode::try_from(3001), Ok(ErrorCode::MemberNotFound));
        assert_eq!(ErrorCode::try_from(4002), Ok(ErrorCode::InvalidRankingWindow));
        assert_eq!(ErrorCode::try_from(0), Err(InvalidErrorCode(0)));
        assert_eq!(ErrorCode::try_from(4101), Err(InvalidErrorCode(4101)));
    }

    #[test]
    fn test_serde() {
        assert_eq!(
            serde_json::to_string(&ErrorCode::MemberNameExists).unwrap(),
            "3002"
        );
        let code: ErrorCode = serde_json::from_str("4003").unwrap();
        assert_eq!(code, ErrorCode::MalformedRecord);
        assert!(serde_json::from_str::<ErrorCode>("10000").is_err());
    }

    #[test]
    fn test_message() {
        assert_eq!(ErrorCode::MemberNotFound.message(), "Member not found");
        assert_eq!(ErrorCode::InvalidCredentials.message(), "Invalid password");
    }
}
