//! 管理员密码校验
//!
//! 启动时将共享密码哈希为 argon2 PHC 字符串，登录时用 [`PasswordVerifier`] 校验。

use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

use crate::utils::AppError;

/// Shared admin password, held only as an argon2 hash
#[derive(Clone)]
pub struct AdminGate {
    hash: String,
}

impl std::fmt::Debug for AdminGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AdminGate(..)")
    }
}

impl AdminGate {
    pub fn new(password: &str) -> Result<Self, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Failed to hash admin password: {e}")))?;
        Ok(Self {
            hash: hash.to_string(),
        })
    }

    pub fn verify(&self, candidate: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(candidate.as_bytes(), &parsed)
            .is_ok()
    }
}
