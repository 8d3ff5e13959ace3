//! Input validation helpers

use crate::utils::AppError;
use shared::ErrorCode;

/// Admin password (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

/// Trim a member name and check it is non-empty.
pub fn validate_member_name(name: &str) -> Result<String, AppError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::with_message(
            ErrorCode::MemberNameEmpty,
            "Member name must not be empty",
        ));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_name_is_trimmed() {
        assert_eq!(validate_member_name("  Kim ").unwrap(), "Kim");
        let err = validate_member_name("   ").unwrap_err();
        assert_eq!(err.code, ErrorCode::MemberNameEmpty);
    }

    #[test]
    fn test_long_member_name_is_accepted() {
        let name = "가".repeat(300);
        assert_eq!(validate_member_name(&format!(" {name} ")).unwrap(), name);
    }
}
