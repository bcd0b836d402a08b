//! Password hashing and verification
//!
//! Argon2id with per-hash random salts; verification uses the argon2
//! crate's constant-time comparison internally.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::observability::Logger;

/// Hash a password using Argon2id.
///
/// Returns `None` when hashing cannot be completed; no error detail is
/// exposed beyond the log event.
pub fn hash_password(password: &str) -> Option<String> {
    let salt = SaltString::generate(&mut OsRng);

    match Argon2::default().hash_password(password.as_bytes(), &salt) {
        Ok(hash) => Some(hash.to_string()),
        Err(_) => {
            Logger::error("PASSWORD_HASH_FAILED", &[]);
            None
        }
    }
}

/// Verify a password against a stored hash.
///
/// `Some(true)` on match, `Some(false)` when the password was checked
/// and did not match, `None` when the operation could not be completed
/// (e.g. the stored hash is malformed).
pub fn verify_password(password: &str, hash: &str) -> Option<bool> {
    let parsed = match PasswordHash::new(hash) {
        Ok(parsed) => parsed,
        Err(_) => {
            Logger::error("PASSWORD_HASH_MALFORMED", &[]);
            return None;
        }
    };

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Some(true),
        Err(argon2::password_hash::Error::Password) => Some(false),
        Err(_) => {
            Logger::error("PASSWORD_VERIFY_FAILED", &[]);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_round_trip() {
        let hash = hash_password("secure_password_123").unwrap();

        assert_ne!(hash, "secure_password_123");
        assert_eq!(verify_password("secure_password_123", &hash), Some(true));
        assert_eq!(verify_password("wrong_password", &hash), Some(false));
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let hash1 = hash_password("same_password").unwrap();
        let hash2 = hash_password("same_password").unwrap();

        // Salted: distinct hashes, both verify.
        assert_ne!(hash1, hash2);
        assert_eq!(verify_password("same_password", &hash1), Some(true));
        assert_eq!(verify_password("same_password", &hash2), Some(true));
    }

    #[test]
    fn test_malformed_hash_fails_closed() {
        // None, not Some(false): the check never ran.
        assert_eq!(verify_password("anything", "not-a-phc-string"), None);
        assert_eq!(verify_password("anything", ""), None);
    }
}
