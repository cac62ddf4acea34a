//! Argon2id password hashing for login credentials.
//!
//! Credentials and field encryption are deliberately unrelated: the
//! password hash verifies identity, the user key (random, wrapped under
//! the master key) protects data. Compromise of one does not compromise
//! the other, and a password change never touches ciphertext.

use crate::error::{CryptoError, CryptoResult};
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, SaltString};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};

/// Hashes a password into a PHC string (algorithm, parameters and salt
/// self-described) for storage on the user row.
pub fn hash_password(password: &str) -> CryptoResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| CryptoError::PasswordHash(e.to_string()))?;
    Ok(hash.to_string())
}

/// Verifies a password against a stored PHC string.
///
/// Returns `Ok(false)` on mismatch; errors only on a malformed stored
/// hash (a data problem, not a caller problem).
pub fn verify_password(password: &str, stored: &str) -> CryptoResult<bool> {
    let parsed =
        PasswordHash::new(stored).map_err(|e| CryptoError::PasswordHash(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
