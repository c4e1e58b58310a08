//! Password hashing backed by bcrypt.
//!
//! Hashes are salted per call, so hashing the same password twice yields two
//! different strings that both verify.
//!
//! bcrypt only reads the first [`MAX_PASSWORD_BYTES`] bytes of its input.
//! Longer passwords are refused rather than silently truncated.

use bcrypt::{DEFAULT_COST, non_truncating_hash, non_truncating_verify};

use crate::errors::AppError;

pub const MAX_PASSWORD_BYTES: usize = 72;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    non_truncating_hash(password, DEFAULT_COST)
        .map_err(|e| AppError::internal_error(format!("Failed to hash password: {}", e)))
}

/// Returns `true` only when `password` matches `hash`.
///
/// A hash that is not a well-formed bcrypt string, or a password longer than
/// [`MAX_PASSWORD_BYTES`], is treated as a mismatch.
pub fn verify_password(password: &str, hash: &str) -> bool {
    match non_truncating_verify(password, hash) {
        Ok(valid) => valid,
        Err(e) => {
            tracing::debug!(error = %e, "Password hash could not be verified");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password_success() {
        let password = "testpassword123";
        let hash = hash_password(password).unwrap();

        assert!(!hash.is_empty());
        assert_ne!(hash, password);
    }

    #[test]
    fn test_verify_password_correct() {
        let hash = hash_password("correctpassword").unwrap();
        assert!(verify_password("correctpassword", &hash));
    }

    #[test]
    fn test_verify_password_incorrect() {
        let hash = hash_password("correctpassword").unwrap();
        assert!(!verify_password("wrongpassword", &hash));
    }

    #[test]
    fn test_verify_password_malformed_hash() {
        assert!(!verify_password("testpassword", "not_a_valid_bcrypt_hash"));
        assert!(!verify_password("testpassword", ""));
    }

    #[test]
    fn test_hash_generates_unique_hashes() {
        let password = "samepassword";
        let hash1 = hash_password(password).unwrap();
        let hash2 = hash_password(password).unwrap();

        assert_ne!(hash1, hash2);
        assert!(verify_password(password, &hash1));
        assert!(verify_password(password, &hash2));
    }

    #[test]
    fn test_verify_case_sensitive() {
        let hash = hash_password("Password123").unwrap();

        assert!(!verify_password("password123", &hash));
        assert!(verify_password("Password123", &hash));
    }

    #[test]
    fn test_hash_unicode_password() {
        let password = "contraseña-密码-🔒";
        let hash = hash_password(password).unwrap();
        assert!(verify_password(password, &hash));
    }

    #[test]
    fn test_multibyte_password_past_bcrypt_limit_is_refused() {
        // 24 three-byte chars fill the 72 bytes bcrypt reads.
        let shared = "密".repeat(24);
        let password = format!("{shared}aaaaaa");
        let different = format!("{shared}bbbbbb");
        assert!(password.len() > MAX_PASSWORD_BYTES);

        assert!(hash_password(&password).is_err());

        let hash = hash_password(&shared).unwrap();
        assert!(verify_password(&shared, &hash));
        assert!(!verify_password(&password, &hash));
        assert!(!verify_password(&different, &hash));
    }

    #[test]
    fn test_password_at_byte_limit_verifies() {
        let password = "a".repeat(MAX_PASSWORD_BYTES);
        let hash = hash_password(&password).unwrap();
        assert!(verify_password(&password, &hash));
        assert!(!verify_password(&"a".repeat(MAX_PASSWORD_BYTES - 1), &hash));
    }
}
